/*
[INPUT]:  HTTP configuration (API key, base URL, timeouts)
[OUTPUT]: Blocking API calls with the same routes and results as the async client
[POS]:    Blocking layer - thread-per-call client
[UPDATE]: When the async client gains or changes an operation
*/

use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::endpoint::{Endpoint, transport_error};
use crate::http::{ClientConfig, Result, routes};
use crate::types::{
    Account, CreateOrderRequest, CreateRefundRequest, CreatedOrder, Customer, CustomerFilter,
    Event, Money, Order, OrderFilter, Payment, PaymentFilter, Refund,
};

/// Blocking client for the ioka API.
///
/// Must not be created or used from inside an async runtime; use
/// [`crate::IokaClient`] there.
#[derive(Debug, Clone)]
pub struct IokaClient {
    http_client: Client,
    api_root: Url,
    config: ClientConfig,
}

impl IokaClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .default_headers(config.default_headers()?)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            api_root: config.api_root()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint<T>) -> Result<T> {
        let url = endpoint.url(&self.api_root)?;
        debug!(method = %endpoint.method, path = url.path(), "ioka request");

        let mut builder = self.http_client.request(endpoint.method.clone(), url);
        if let Some(body) = &endpoint.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .map_err(|e| transport_error(e, self.config.timeout))?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|e| transport_error(e, self.config.timeout))?;

        endpoint.process(status, &body)
    }

    /// POST /v2/orders
    pub fn create_order(&self, request: &CreateOrderRequest) -> Result<CreatedOrder> {
        self.execute(routes::create_order(request)?)
    }

    /// GET /v2/orders
    pub fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        self.execute(routes::get_orders(filter)?)
    }

    /// GET /v2/orders/{order_id}
    pub fn get_order(&self, order_id: &str) -> Result<Order> {
        self.execute(routes::get_order(order_id)?)
    }

    /// PATCH /v2/orders/{order_id}
    pub fn update_order(&self, order_id: &str, amount: Money) -> Result<Order> {
        self.execute(routes::update_order(order_id, amount)?)
    }

    /// POST /v2/orders/{order_id}/capture
    pub fn capture_order(&self, order_id: &str, amount: Money, reason: Option<&str>) -> Result<Order> {
        self.execute(routes::capture_order(order_id, amount, reason)?)
    }

    /// POST /v2/orders/{order_id}/cancel
    pub fn cancel_order(&self, order_id: &str, reason: Option<&str>) -> Result<Order> {
        self.execute(routes::cancel_order(order_id, reason)?)
    }

    /// GET /v2/orders/{order_id}/events
    pub fn get_order_events(&self, order_id: &str) -> Result<Vec<Event>> {
        self.execute(routes::get_order_events(order_id)?)
    }

    /// GET /v2/orders/{order_id}/refunds
    pub fn get_refunds(&self, order_id: &str) -> Result<Vec<Refund>> {
        self.execute(routes::get_refunds(order_id)?)
    }

    /// POST /v2/orders/{order_id}/refunds
    pub fn create_refund(&self, order_id: &str, request: &CreateRefundRequest) -> Result<Refund> {
        self.execute(routes::create_refund(order_id, request)?)
    }

    /// GET /v2/orders/{order_id}/payments
    pub fn get_payments(&self, order_id: &str, filter: &PaymentFilter) -> Result<Vec<Payment>> {
        self.execute(routes::get_payments(order_id, filter)?)
    }

    /// GET /v2/customers
    pub fn get_customers(&self, filter: &CustomerFilter) -> Result<Vec<Customer>> {
        self.execute(routes::get_customers(filter)?)
    }

    /// GET /v2/accounts
    pub fn get_accounts(&self) -> Result<Vec<Account>> {
        self.execute(routes::get_accounts()?)
    }
}
