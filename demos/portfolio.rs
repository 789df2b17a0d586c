/// Portfolio example: the signed account endpoints end to end.
///
/// Reads BITSTAMP_CUSTOMER_ID, BITSTAMP_API_KEY and BITSTAMP_API_SECRET
/// from the environment.
/// Run with: cargo run --example portfolio
use bitstamp_sdk::models::SortDirection;
use bitstamp_sdk::{BitstampClient, Credentials};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::from_env()?;
    let client = BitstampClient::new();

    // 1. Balances, skipping currencies the account never held
    println!("--- Balances ---");
    let balances = client.account_balances(&credentials).await?;
    for balance in balances.iter().filter(|b| b.total > Decimal::ZERO) {
        println!(
            "  {}: total={} available={} reserved={}",
            balance.currency.as_deref().unwrap_or("?"),
            balance.total,
            balance.available,
            balance.reserved,
        );
    }

    // 2. Orders resting on the book
    println!("\n--- Open orders ---");
    let orders = client.open_orders(&credentials).await?;
    if orders.is_empty() {
        println!("  none");
    }
    for order in &orders {
        println!(
            "  #{} {:?} {} @ {} on {}",
            order.id.as_deref().unwrap_or("?"),
            order.side,
            order.amount,
            order.price,
            order.currency_pair.as_deref().unwrap_or("?"),
        );
    }

    // 3. Recent account history, newest first
    println!("\n--- Last 10 transactions ---");
    let history = client
        .user_transactions(&credentials, None, Some(10), Some(SortDirection::Descending))
        .await?;
    for row in &history {
        let stamp = row
            .datetime
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "  {stamp} {:?} usd={} btc={} fee={}",
            row.kind, row.usd, row.btc, row.fee,
        );
    }

    Ok(())
}
