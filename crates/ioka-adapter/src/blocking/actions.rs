/*
[INPUT]:  A fetched Order and the blocking client
[OUTPUT]: Order convenience calls delegating to blocking::IokaClient
[POS]:    Blocking layer - entity instance methods
[UPDATE]: When client order operations change
*/

use super::IokaClient;
use crate::http::Result;
use crate::types::{CreateRefundRequest, Event, Money, Order, Payment, PaymentFilter, Refund};

/// Blocking counterpart of [`crate::http::OrderActions`]
pub trait OrderActions {
    fn cancel(&self, client: &IokaClient, reason: Option<&str>) -> Result<Order>;

    /// Capture `amount`, or the whole order amount when `None`
    fn capture(&self, client: &IokaClient, amount: Option<Money>, reason: Option<&str>) -> Result<Order>;

    /// Change the amount; on success `self` is replaced by the server's order
    fn update(&mut self, client: &IokaClient, amount: Money) -> Result<()>;

    fn refund(&self, client: &IokaClient, request: &CreateRefundRequest) -> Result<Refund>;

    fn refunds(&self, client: &IokaClient) -> Result<Vec<Refund>>;

    fn payments(&self, client: &IokaClient, filter: &PaymentFilter) -> Result<Vec<Payment>>;

    fn events(&self, client: &IokaClient) -> Result<Vec<Event>>;
}

impl OrderActions for Order {
    fn cancel(&self, client: &IokaClient, reason: Option<&str>) -> Result<Order> {
        client.cancel_order(&self.id, reason)
    }

    fn capture(&self, client: &IokaClient, amount: Option<Money>, reason: Option<&str>) -> Result<Order> {
        let amount = self.capture_amount(amount)?;
        client.capture_order(&self.id, amount, reason)
    }

    fn update(&mut self, client: &IokaClient, amount: Money) -> Result<()> {
        *self = client.update_order(&self.id, amount)?;
        Ok(())
    }

    fn refund(&self, client: &IokaClient, request: &CreateRefundRequest) -> Result<Refund> {
        client.create_refund(&self.id, request)
    }

    fn refunds(&self, client: &IokaClient) -> Result<Vec<Refund>> {
        client.get_refunds(&self.id)
    }

    fn payments(&self, client: &IokaClient, filter: &PaymentFilter) -> Result<Vec<Payment>> {
        client.get_payments(&self.id, filter)
    }

    fn events(&self, client: &IokaClient) -> Result<Vec<Event>> {
        client.get_order_events(&self.id)
    }
}
