/*
[INPUT]:  IOKA_API_KEY environment variable and the stage API
[OUTPUT]: Created order, its payments and events printed to stdout
[POS]:    Examples - async order lifecycle
[UPDATE]: When order operations change
*/

use ioka_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: create an order on the stage environment and inspect it
///
/// Run with `IOKA_API_KEY=... RUST_LOG=ioka_adapter=debug`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== ioka Order Lifecycle Example ===\n");

    let api_key = match std::env::var("IOKA_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set IOKA_API_KEY to a stage API key");
            return;
        }
    };

    let client = match IokaClient::new(ClientConfig::new(api_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}", client.config().base_url);

    let amount = match Money::kzt(150_000) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Invalid amount: {}", e);
            return;
        }
    };
    let request = CreateOrderRequest {
        capture_method: CaptureMethod::Manual,
        description: Some("Example order".to_string()),
        ..CreateOrderRequest::new(amount)
    };

    let created = match client.create_order(&request).await {
        Ok(created) => created,
        Err(e) => {
            eprintln!("create_order failed: {}", e);
            return;
        }
    };
    let order = created.order;
    println!("✓ Order {} created for {}", order.id, order.amount);
    if let Some(url) = &order.checkout_url {
        println!("  Checkout: {}", url);
    }

    match order.events(&client).await {
        Ok(events) => {
            for event in events {
                println!("  event {:?} at {}", event.name, event.created_at);
            }
        }
        Err(e) => eprintln!("get_order_events failed: {}", e),
    }

    // Unpaid orders cannot be captured; the API answers with a conflict
    match order.capture(&client, None, Some("example")).await {
        Ok(captured) => println!("✓ Captured, status {:?}", captured.status),
        Err(e) if e.status_kind() == Some(StatusErrorKind::Conflict) => {
            println!("  Capture refused: {}", e)
        }
        Err(e) => eprintln!("capture failed: {}", e),
    }

    match order.cancel(&client, Some("example finished")).await {
        Ok(cancelled) => println!("✓ Cancelled, status {:?}", cancelled.status),
        Err(e) => eprintln!("cancel failed: {}", e),
    }
}
