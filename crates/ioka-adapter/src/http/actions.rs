/*
[INPUT]:  A fetched Order and the async client
[OUTPUT]: Order convenience calls delegating to IokaClient
[POS]:    HTTP layer - entity instance methods (async)
[UPDATE]: When client order operations change
*/

use async_trait::async_trait;

use crate::http::{IokaClient, Result};
use crate::types::{CreateRefundRequest, Event, Money, Order, Payment, PaymentFilter, Refund};

/// Order-scoped shortcuts; each call is the client method with `self.id`.
#[async_trait]
pub trait OrderActions {
    /// Cancel the order, returning the server's updated order
    async fn cancel(&self, client: &IokaClient, reason: Option<&str>) -> Result<Order>;

    /// Capture `amount`, or the whole order amount when `None`
    async fn capture(
        &self,
        client: &IokaClient,
        amount: Option<Money>,
        reason: Option<&str>,
    ) -> Result<Order>;

    /// Change the amount; on success `self` is replaced by the server's order
    async fn update(&mut self, client: &IokaClient, amount: Money) -> Result<()>;

    async fn refund(&self, client: &IokaClient, request: &CreateRefundRequest) -> Result<Refund>;

    async fn refunds(&self, client: &IokaClient) -> Result<Vec<Refund>>;

    async fn payments(&self, client: &IokaClient, filter: &PaymentFilter) -> Result<Vec<Payment>>;

    async fn events(&self, client: &IokaClient) -> Result<Vec<Event>>;
}

#[async_trait]
impl OrderActions for Order {
    async fn cancel(&self, client: &IokaClient, reason: Option<&str>) -> Result<Order> {
        client.cancel_order(&self.id, reason).await
    }

    async fn capture(
        &self,
        client: &IokaClient,
        amount: Option<Money>,
        reason: Option<&str>,
    ) -> Result<Order> {
        let amount = self.capture_amount(amount)?;
        client.capture_order(&self.id, amount, reason).await
    }

    async fn update(&mut self, client: &IokaClient, amount: Money) -> Result<()> {
        *self = client.update_order(&self.id, amount).await?;
        Ok(())
    }

    async fn refund(&self, client: &IokaClient, request: &CreateRefundRequest) -> Result<Refund> {
        client.create_refund(&self.id, request).await
    }

    async fn refunds(&self, client: &IokaClient) -> Result<Vec<Refund>> {
        client.get_refunds(&self.id).await
    }

    async fn payments(&self, client: &IokaClient, filter: &PaymentFilter) -> Result<Vec<Payment>> {
        client.get_payments(&self.id, filter).await
    }

    async fn events(&self, client: &IokaClient) -> Result<Vec<Event>> {
        client.get_order_events(&self.id).await
    }
}
