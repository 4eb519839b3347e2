/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the async client
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints change
*/

mod common;

use std::time::Duration;

use common::{
    TEST_API_KEY, async_client, error_json, event_json, order_json, payment_json, refund_json,
    setup_mock_server, test_config,
};
use ioka_adapter::{
    CaptureMethod, ClientConfig, CreateOrderRequest, CustomerFilter, EventName, IokaClient,
    IokaError, Money, OrderActions, OrderFilter, OrderStatus, Pagination, PaymentFilter,
    PaymentStatus, StatusErrorKind,
};
use rstest::rstest;
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(IokaClient::new(ClientConfig::new(TEST_API_KEY)));
}

#[test]
fn test_client_rejects_empty_api_key() {
    let err = IokaClient::new(ClientConfig::new("")).unwrap_err();
    assert!(matches!(err, IokaError::Config(_)));
}

#[tokio::test]
async fn test_create_order_returns_access_token() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders"))
        .and(header("api-key", TEST_API_KEY))
        .and(body_json(json!({
            "amount": 150000,
            "capture_method": "MANUAL",
            "external_id": "ext-42"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "order": order_json("ord_1", "UNPAID", 150000),
            "order_access_token": "ord_1_secret"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateOrderRequest {
        capture_method: CaptureMethod::Manual,
        external_id: Some("ext-42".to_string()),
        ..CreateOrderRequest::new(assert_ok!(Money::kzt(150000)))
    };
    let created = assert_ok!(async_client(&server).create_order(&request).await);

    assert_eq!(created.order_access_token, "ord_1_secret");
    assert_eq!(created.order.id, "ord_1");
    assert_eq!(created.order.status, OrderStatus::Unpaid);
    assert_eq!(created.order.amount.minors(), 150000);
    assert_eq!(created.order.capture_method, CaptureMethod::Manual);
}

#[tokio::test]
async fn test_get_orders_sends_filter_as_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/orders"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "25"))
        .and(query_param("min_amount", "1000"))
        .and(query_param("max_amount", "5000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            order_json("ord_1", "PAID", 2000),
            order_json("ord_2", "ON_HOLD", 3000),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = OrderFilter {
        pagination: Pagination::page(2, 25),
        min_amount: Some(assert_ok!(Money::kzt(1000))),
        max_amount: Some(assert_ok!(Money::kzt(5000))),
        ..OrderFilter::default()
    };
    let orders = assert_ok!(async_client(&server).get_orders(&filter).await);

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].status, OrderStatus::OnHold);
}

#[tokio::test]
async fn test_invalid_filter_never_reaches_server() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let filter = OrderFilter {
        pagination: Pagination::page(0, 10),
        ..OrderFilter::default()
    };
    let err = async_client(&server).get_orders(&filter).await.unwrap_err();
    assert!(matches!(err, IokaError::InvalidArgument(_)));
}

#[tokio::test]
async fn test_conflict_carries_api_code_and_message() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders/ord_1/capture"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(error_json("OrderUnpaid", "Order is unpaid")),
        )
        .mount(&server)
        .await;

    let err = async_client(&server)
        .capture_order("ord_1", assert_ok!(Money::kzt(1000)), None)
        .await
        .unwrap_err();

    let status = err.as_status().expect("status error");
    assert_eq!(status.kind, StatusErrorKind::Conflict);
    assert_eq!(status.status.as_u16(), 409);
    assert_eq!(status.code, "OrderUnpaid");
    assert_eq!(status.message, "Order is unpaid");
    assert_eq!(err.to_string(), "OrderUnpaid: Order is unpaid");
    assert!(!err.is_retryable());
}

#[rstest]
#[case(400, StatusErrorKind::Validation)]
#[case(401, StatusErrorKind::Unauthenticated)]
#[case(403, StatusErrorKind::Unauthorized)]
#[case(404, StatusErrorKind::NotFound)]
#[case(409, StatusErrorKind::Conflict)]
#[case(429, StatusErrorKind::Other)]
#[case(502, StatusErrorKind::Other)]
#[tokio::test]
async fn test_status_mapping(#[case] status: u16, #[case] expected: StatusErrorKind) {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(ResponseTemplate::new(status).set_body_json(error_json("Code", "message")))
        .mount(&server)
        .await;

    let err = async_client(&server).get_accounts().await.unwrap_err();
    assert_eq!(err.status_kind(), Some(expected));
    assert_eq!(err.api_code(), Some("Code"));
}

#[tokio::test]
async fn test_non_json_error_body_is_unknown() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/orders/ord_1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = async_client(&server).get_order("ord_1").await.unwrap_err();
    let status = err.as_status().expect("status error");
    assert_eq!(status.kind, StatusErrorKind::Other);
    assert_eq!(status.code, "Unknown");
    assert_eq!(status.message, "upstream exploded");
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/orders/ord_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "ord_1"})))
        .mount(&server)
        .await;

    let err = async_client(&server).get_order("ord_1").await.unwrap_err();
    assert!(matches!(err, IokaError::Serialization(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = test_config(&server).with_timeout(Duration::from_millis(200));
    let client = assert_ok!(IokaClient::new(config));
    let err = client.get_accounts().await.unwrap_err();

    assert!(err.is_timeout());
    assert!(err.is_retryable());
    assert!(matches!(&err, IokaError::Timeout { duration } if *duration == Duration::from_millis(200)));
    assert_eq!(err.to_string(), "Request timed out after 200ms");
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    let config = ClientConfig::new(TEST_API_KEY)
        .with_base_url("http://127.0.0.1:1")
        .with_connect_timeout(Duration::from_secs(2));
    let client = assert_ok!(IokaClient::new(config));

    let err = client.get_accounts().await.unwrap_err();
    assert!(matches!(err, IokaError::Http(_)));
    assert!(err.as_status().is_none());
}

#[tokio::test]
async fn test_get_payments_and_events() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/orders/ord_1/payments"))
        .and(query_param("payment_status", "APPROVED"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([payment_json("pay_1", "ord_1")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/orders/ord_1/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event_json("evt_1", "ord_1", "ORDER_CREATED"),
            event_json("evt_2", "ord_1", "PAYMENT_APPROVED"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = async_client(&server);
    let filter = PaymentFilter {
        payment_status: Some(PaymentStatus::Approved),
        ..PaymentFilter::default()
    };
    let payments = assert_ok!(client.get_payments("ord_1", &filter).await);
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].approved_amount, 10000);
    assert_eq!(
        payments[0].payer.as_ref().and_then(|p| p.pan_masked.as_deref()),
        Some("400000******0002")
    );

    let events = assert_ok!(client.get_order_events("ord_1").await);
    assert_eq!(events[0].name, EventName::OrderCreated);
    assert_eq!(events[1].name, EventName::PaymentApproved);
}

#[tokio::test]
async fn test_get_customers_uses_default_paging() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v2/customers"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "cus_1",
            "created_at": "2024-03-01T10:00:00",
            "status": "READY",
            "email": "buyer@example.com"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let customers = assert_ok!(
        async_client(&server)
            .get_customers(&CustomerFilter::default())
            .await
    );
    assert_eq!(customers[0].id, "cus_1");
    assert_eq!(customers[0].email.as_deref(), Some("buyer@example.com"));
}

#[tokio::test]
async fn test_order_actions_match_client_calls() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders/ord_1/cancel"))
        .and(body_json(json!({"reason": "customer request"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_json("ord_1", "EXPIRED", 10000)),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/orders/ord_1/refunds"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([refund_json("ref_1", "ord_1")])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = async_client(&server);
    let order: ioka_adapter::Order =
        assert_ok!(serde_json::from_value(order_json("ord_1", "ON_HOLD", 10000)));

    let direct = assert_ok!(client.cancel_order("ord_1", Some("customer request")).await);
    let via_order = assert_ok!(order.cancel(&client, Some("customer request")).await);
    assert_eq!(direct, via_order);
    assert_eq!(via_order.status, OrderStatus::Expired);

    let direct = assert_ok!(client.get_refunds("ord_1").await);
    let via_order = assert_ok!(order.refunds(&client).await);
    assert_eq!(direct, via_order);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].body, requests[1].body);
    assert_eq!(requests[2].url, requests[3].url);
}

#[tokio::test]
async fn test_update_replaces_order() {
    let server = setup_mock_server().await;
    Mock::given(method("PATCH"))
        .and(path("/v2/orders/ord_1"))
        .and(body_json(json!({"amount": 25000})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(order_json("ord_1", "UNPAID", 25000)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = async_client(&server);
    let mut order: ioka_adapter::Order =
        assert_ok!(serde_json::from_value(order_json("ord_1", "UNPAID", 10000)));

    assert_ok!(order.update(&client, assert_ok!(Money::kzt(25000))).await);
    assert_eq!(order.amount.minors(), 25000);
}

#[tokio::test]
async fn test_capture_defaults_to_full_amount() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v2/orders/ord_1/capture"))
        .and(body_json(json!({"amount": 10000})))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json("ord_1", "PAID", 10000)))
        .expect(1)
        .mount(&server)
        .await;

    let client = async_client(&server);
    let order: ioka_adapter::Order =
        assert_ok!(serde_json::from_value(order_json("ord_1", "ON_HOLD", 10000)));

    let captured = assert_ok!(order.capture(&client, None, None).await);
    assert_eq!(captured.status, OrderStatus::Paid);
}

#[tokio::test]
async fn test_capture_above_order_amount_is_rejected_locally() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = async_client(&server);
    let order: ioka_adapter::Order =
        assert_ok!(serde_json::from_value(order_json("ord_1", "ON_HOLD", 10000)));

    let err = order
        .capture(&client, Some(assert_ok!(Money::kzt(20000))), None)
        .await
        .unwrap_err();
    assert!(matches!(err, IokaError::InvalidArgument(_)));
}
