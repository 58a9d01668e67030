//! Example: Signing and placing an order on the sandbox.
//!
//! Run with: cargo run --example signed_order

use std::str::FromStr;
use std::sync::Arc;

use gemini_api_client::auth::{EnvCredentials, RequestEnvelope, Role, SessionRegistry};
use gemini_api_client::rest::GeminiRestClient;
use gemini_api_client::rest::private::NewOrderRequest;
use gemini_api_client::types::{OrderOption, Side};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds.into_credentials(),
        None => {
            println!("Set GEMINI_API_KEY and GEMINI_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let registry = Arc::new(SessionRegistry::new());
    registry.add_session(
        1,
        credentials.api_key.clone(),
        credentials.expose_secret(),
        Role::Trader,
        false,
    )?;
    let account = registry.bind(1)?.sandbox();

    // What the signer sends for a request, without touching the network.
    let preview = RequestEnvelope::new("balances", account.next_nonce());
    println!("Envelope: {}", String::from_utf8(preview.to_json()?)?);

    let client = GeminiRestClient::builder().account(account).build();

    // Maker-or-cancel far from the market so it never fills.
    let request = NewOrderRequest::limit(
        "btcusd",
        Side::Buy,
        Decimal::from_str("0.001")?,
        Decimal::from_str("1000")?,
    )
    .client_order_id("example-order-1")
    .option(OrderOption::MakerOrCancel);

    let order = client.new_order(&request).await?;
    println!("Placed order {} (live: {})", order.order_id, order.is_live);

    let cancelled = client.cancel_order(order.order_id).await?;
    println!("Cancelled order {}", cancelled.order_id);

    Ok(())
}
