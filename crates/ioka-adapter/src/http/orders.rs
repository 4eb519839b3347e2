/*
[INPUT]:  Order, payment and refund parameters
[OUTPUT]: Typed orders, payments, refunds and events
[POS]:    HTTP layer - order lifecycle endpoints (async)
[UPDATE]: When adding order endpoints or changing their parameters
*/

use crate::http::{IokaClient, Result, routes};
use crate::types::{
    CreateOrderRequest, CreateRefundRequest, CreatedOrder, Event, Money, Order, OrderFilter,
    Payment, PaymentFilter, Refund,
};

impl IokaClient {
    /// Create a new order
    ///
    /// POST /v2/orders
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<CreatedOrder> {
        self.execute(routes::create_order(request)?).await
    }

    /// List orders
    ///
    /// GET /v2/orders?page={page}&limit={limit}&...
    pub async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        self.execute(routes::get_orders(filter)?).await
    }

    /// GET /v2/orders/{order_id}
    pub async fn get_order(&self, order_id: &str) -> Result<Order> {
        self.execute(routes::get_order(order_id)?).await
    }

    /// Change the amount of an unpaid order
    ///
    /// PATCH /v2/orders/{order_id}
    pub async fn update_order(&self, order_id: &str, amount: Money) -> Result<Order> {
        self.execute(routes::update_order(order_id, amount)?).await
    }

    /// Capture funds held by a manual-capture order
    ///
    /// POST /v2/orders/{order_id}/capture
    pub async fn capture_order(
        &self,
        order_id: &str,
        amount: Money,
        reason: Option<&str>,
    ) -> Result<Order> {
        self.execute(routes::capture_order(order_id, amount, reason)?)
            .await
    }

    /// Release held funds
    ///
    /// POST /v2/orders/{order_id}/cancel
    pub async fn cancel_order(&self, order_id: &str, reason: Option<&str>) -> Result<Order> {
        self.execute(routes::cancel_order(order_id, reason)?).await
    }

    /// GET /v2/orders/{order_id}/events
    pub async fn get_order_events(&self, order_id: &str) -> Result<Vec<Event>> {
        self.execute(routes::get_order_events(order_id)?).await
    }

    /// GET /v2/orders/{order_id}/refunds
    pub async fn get_refunds(&self, order_id: &str) -> Result<Vec<Refund>> {
        self.execute(routes::get_refunds(order_id)?).await
    }

    /// POST /v2/orders/{order_id}/refunds
    pub async fn create_refund(
        &self,
        order_id: &str,
        request: &CreateRefundRequest,
    ) -> Result<Refund> {
        self.execute(routes::create_refund(order_id, request)?)
            .await
    }

    /// GET /v2/orders/{order_id}/payments
    pub async fn get_payments(&self, order_id: &str, filter: &PaymentFilter) -> Result<Vec<Payment>> {
        self.execute(routes::get_payments(order_id, filter)?)
            .await
    }
}
