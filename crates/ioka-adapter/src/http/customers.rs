/*
[INPUT]:  Customer filters
[OUTPUT]: Customers and settlement accounts
[POS]:    HTTP layer - customer and account endpoints (async)
[UPDATE]: When adding customer/account endpoints or filters
*/

use crate::http::{IokaClient, Result, routes};
use crate::types::{Account, Customer, CustomerFilter};

impl IokaClient {
    /// Query customers with optional filters
    ///
    /// GET /v2/customers?page={page}&limit={limit}&status={status}&...
    pub async fn get_customers(&self, filter: &CustomerFilter) -> Result<Vec<Customer>> {
        self.execute(routes::get_customers(filter)?).await
    }

    /// GET /v2/accounts
    pub async fn get_accounts(&self) -> Result<Vec<Account>> {
        self.execute(routes::get_accounts()?).await
    }
}
