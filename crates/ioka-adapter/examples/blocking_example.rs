/*
[INPUT]:  IOKA_API_KEY environment variable and the stage API
[OUTPUT]: Recent orders and shop accounts printed to stdout
[POS]:    Examples - blocking client usage
[UPDATE]: When the blocking surface changes
*/

use ioka_adapter::blocking::IokaClient;
use ioka_adapter::{ClientConfig, OrderFilter, Pagination};
use tracing_subscriber::EnvFilter;

/// Example: list recent orders without an async runtime
///
/// Run with `IOKA_API_KEY=... RUST_LOG=ioka_adapter=debug`.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== ioka Blocking Client Example ===\n");

    let Ok(api_key) = std::env::var("IOKA_API_KEY") else {
        eprintln!("Set IOKA_API_KEY to a stage API key");
        return;
    };

    let client = match IokaClient::new(ClientConfig::new(api_key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let filter = OrderFilter {
        pagination: Pagination::page(1, 5),
        ..OrderFilter::default()
    };
    match client.get_orders(&filter) {
        Ok(orders) => {
            println!("✓ {} recent orders", orders.len());
            for order in orders {
                println!("  {} {:?} {}", order.id, order.status, order.amount);
            }
        }
        Err(e) => eprintln!("get_orders failed: {}", e),
    }

    match client.get_accounts() {
        Ok(accounts) => println!("✓ {} accounts", accounts.len()),
        Err(e) => eprintln!("get_accounts failed: {}", e),
    }
}
