/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ioka-adapter tests

#![allow(dead_code)]

use ioka_adapter::{ClientConfig, IokaClient, blocking};
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointing at the mock server
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(TEST_API_KEY).with_base_url(server.uri())
}

pub fn async_client(server: &MockServer) -> IokaClient {
    IokaClient::new(test_config(server)).expect("async client init")
}

/// Must be called outside of any async context
pub fn blocking_client(server: &MockServer) -> blocking::IokaClient {
    blocking::IokaClient::new(test_config(server)).expect("blocking client init")
}

/// Order body as returned by the API
pub fn order_json(id: &str, status: &str, amount: i64) -> Value {
    json!({
        "id": id,
        "shop_id": "shp_test",
        "status": status,
        "created_at": "2024-03-01T10:15:30.123456",
        "amount": amount,
        "currency": "KZT",
        "capture_method": "MANUAL",
        "external_id": "ext-42",
        "description": "test order",
        "extra_info": null,
        "mcc": null,
        "acquirer": null,
        "customer_id": null,
        "card_id": null,
        "attempts": 10,
        "checkout_url": format!("https://checkout.ioka.kz/orders/{id}"),
        "payments": null
    })
}

pub fn payment_json(id: &str, order_id: &str) -> Value {
    json!({
        "id": id,
        "shop_id": "shp_test",
        "order_id": order_id,
        "status": "APPROVED",
        "created_at": "2024-03-01T10:16:00.000001",
        "approved_amount": 10000,
        "captured_amount": 0,
        "refunded_amount": 0,
        "processing_fee": 1.5,
        "payer": {
            "type": "CARD",
            "pan_masked": "400000******0002",
            "expiry_date": "12/29",
            "holder": "TEST HOLDER",
            "payment_system": "VISA",
            "emitter": "TEST BANK",
            "email": null,
            "phone": null,
            "customer_id": null,
            "card_id": null
        },
        "error": null,
        "acquirer": {"name": "TEST_ACQ", "reference": "rrn-1"},
        "action": null
    })
}

pub fn refund_json(id: &str, order_id: &str) -> Value {
    json!({
        "id": id,
        "payment_id": "pay_1",
        "order_id": order_id,
        "status": "APPROVED",
        "created_at": "2024-03-02T09:00:00",
        "error": null,
        "acquirer": null
    })
}

pub fn event_json(id: &str, order_id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "created_at": "2024-03-01T10:15:31",
        "order_id": order_id,
        "payment_id": null,
        "refund_id": null,
        "code": null,
        "message": null
    })
}

pub fn customer_json(id: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-01-01T00:00:00.000001",
        "status": "READY",
        "external_id": "ext-cus",
        "email": "buyer@example.com",
        "phone": null,
        "accounts": [{
            "id": "acc_1",
            "shop_id": "shp_test",
            "customer_id": id,
            "status": "ACCEPTED",
            "name": "main",
            "amount": 12500,
            "currency": "KZT",
            "resources": [{"id": "res_1", "iban": "KZ000000000000000001", "is_default": true}],
            "created_at": "2024-01-01T00:00:00"
        }],
        "checkout_url": null,
        "access_token": null
    })
}

/// API error payload
pub fn error_json(code: &str, message: &str) -> Value {
    json!({"code": code, "message": message})
}
