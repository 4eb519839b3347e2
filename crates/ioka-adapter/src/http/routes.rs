/*
[INPUT]:  Typed operation parameters
[OUTPUT]: Validated Endpoint descriptions, one per API operation
[POS]:    HTTP layer - route table shared by the async and blocking clients
[UPDATE]: When adding endpoints or changing request shapes
*/

use crate::http::Result;
use crate::http::endpoint::{Endpoint, require_id};
use crate::types::{
    Account, CancelOrderRequest, CaptureOrderRequest, CreateOrderRequest, CreateRefundRequest,
    CreatedOrder, Customer, CustomerFilter, Event, Money, Order, OrderFilter, Payment,
    PaymentFilter, Refund, UpdateOrderRequest,
};

/// POST /orders
pub(crate) fn create_order(request: &CreateOrderRequest) -> Result<Endpoint<CreatedOrder>> {
    Endpoint::post(&["orders"]).json(request)
}

/// GET /orders
pub(crate) fn get_orders(filter: &OrderFilter) -> Result<Endpoint<Vec<Order>>> {
    Ok(Endpoint::get(&["orders"]).query(filter.query_pairs()?))
}

/// GET /orders/{order_id}
pub(crate) fn get_order(order_id: &str) -> Result<Endpoint<Order>> {
    Ok(Endpoint::get(&["orders", require_id("order_id", order_id)?]))
}

/// PATCH /orders/{order_id}
pub(crate) fn update_order(order_id: &str, amount: Money) -> Result<Endpoint<Order>> {
    Endpoint::patch(&["orders", require_id("order_id", order_id)?])
        .json(&UpdateOrderRequest { amount })
}

/// POST /orders/{order_id}/capture
pub(crate) fn capture_order(
    order_id: &str,
    amount: Money,
    reason: Option<&str>,
) -> Result<Endpoint<Order>> {
    Endpoint::post(&["orders", require_id("order_id", order_id)?, "capture"]).json(
        &CaptureOrderRequest {
            amount,
            reason: reason.map(str::to_string),
        },
    )
}

/// POST /orders/{order_id}/cancel
pub(crate) fn cancel_order(order_id: &str, reason: Option<&str>) -> Result<Endpoint<Order>> {
    Endpoint::post(&["orders", require_id("order_id", order_id)?, "cancel"]).json(
        &CancelOrderRequest {
            reason: reason.map(str::to_string),
        },
    )
}

/// GET /orders/{order_id}/events
pub(crate) fn get_order_events(order_id: &str) -> Result<Endpoint<Vec<Event>>> {
    Ok(Endpoint::get(&["orders", require_id("order_id", order_id)?, "events"]))
}

/// GET /orders/{order_id}/refunds
pub(crate) fn get_refunds(order_id: &str) -> Result<Endpoint<Vec<Refund>>> {
    Ok(Endpoint::get(&["orders", require_id("order_id", order_id)?, "refunds"]))
}

/// POST /orders/{order_id}/refunds
pub(crate) fn create_refund(
    order_id: &str,
    request: &CreateRefundRequest,
) -> Result<Endpoint<Refund>> {
    Endpoint::post(&["orders", require_id("order_id", order_id)?, "refunds"]).json(request)
}

/// GET /orders/{order_id}/payments
pub(crate) fn get_payments(
    order_id: &str,
    filter: &PaymentFilter,
) -> Result<Endpoint<Vec<Payment>>> {
    Ok(
        Endpoint::get(&["orders", require_id("order_id", order_id)?, "payments"])
            .query(filter.query_pairs()?),
    )
}

/// GET /customers
pub(crate) fn get_customers(filter: &CustomerFilter) -> Result<Endpoint<Vec<Customer>>> {
    Ok(Endpoint::get(&["customers"]).query(filter.query_pairs()?))
}

/// GET /accounts
pub(crate) fn get_accounts() -> Result<Endpoint<Vec<Account>>> {
    Ok(Endpoint::get(&["accounts"]))
}
