/// Quickstart example: a tour of the public market-data endpoints.
///
/// Needs no credentials.
/// Run with: cargo run --example quickstart
use bitstamp_sdk::models::{CandleStep, TransactionInterval};
use bitstamp_sdk::BitstampClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = BitstampClient::new();
    let pair = "btceur";

    // 1. Daily ticker
    let ticker = client.ticker(pair).await?;
    println!(
        "{pair}: last={} bid={} ask={} volume={}",
        ticker.last, ticker.bid, ticker.ask, ticker.volume
    );
    if let Some(change) = ticker.percent_change_24 {
        println!("24h change: {change}%");
    }

    // 2. Order book, grouped by price level
    let book = client.order_book(pair, true).await?;
    println!("\nTop of book:");
    for level in book.asks.iter().take(3).rev() {
        println!("  ask {} x {}", level.price, level.amount);
    }
    for level in book.bids.iter().take(3) {
        println!("  bid {} x {}", level.price, level.amount);
    }

    // 3. Trades from the last hour
    let trades = client
        .transactions(pair, Some(TransactionInterval::Hour))
        .await?;
    println!("\n{} trades in the last hour", trades.len());
    if let Some(trade) = trades.first() {
        println!(
            "most recent: {} @ {} side={:?}",
            trade.amount, trade.price, trade.side
        );
    }

    // 4. A day of hourly candles (untyped payload)
    let candles = client.ohlc(pair, CandleStep::OneHour, 24).await?;
    let count = candles
        .pointer("/data/ohlc")
        .and_then(|data| data.as_array())
        .map_or(0, |rows| rows.len());
    println!("\nfetched {count} hourly candles");

    // 5. The conversion rate applied to fiat bookkeeping
    let rate = client.eur_usd_conversion_rate().await?;
    println!("\nEUR/USD: buy {} / sell {}", rate.buy, rate.sell);

    Ok(())
}
