//! Demo 3: Recent Trades
//!
//! Showcases: Trade tape with buy/sell volume split, polled by cursor
//!
//! Run: cargo run --bin recent_trades [PAIR]

use colored::*;
use kraken_rest::{ClientConfig, KrakenRestClient, RestError};
use kraken_types::pairs::XXBTZEUR;
use kraken_types::{Side, TradeEntry};
use rust_decimal::Decimal;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const POLLS: usize = 6;
const POLL_INTERVAL: Duration = Duration::from_secs(10);
const SHOWN: usize = 10;

fn print_trade(trade: &TradeEntry) {
    let side = match trade.side() {
        Some(Side::Buy) => "BUY ".green(),
        Some(Side::Sell) => "SELL".red(),
        None => "????".normal(),
    };
    let kind = if trade.is_market() { "market" } else { "limit" };
    println!(
        "  {}  {}  {:>14} @ {:<14} {}",
        trade.datetime().format("%H:%M:%S%.4f").to_string().dimmed(),
        side,
        trade.volume,
        trade.price,
        kind.dimmed()
    );
}

fn volume_split(trades: &[TradeEntry]) -> (Decimal, Decimal) {
    trades.iter().fold((Decimal::ZERO, Decimal::ZERO), |(buy, sell), t| {
        let volume = t.volume_decimal().unwrap_or_default();
        match t.side() {
            Some(Side::Buy) => (buy + volume, sell),
            Some(Side::Sell) => (buy, sell + volume),
            None => (buy, sell),
        }
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| XXBTZEUR.to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  RECENT TRADES".cyan().bold());
    println!("{}", format!("  {pair} trade tape").cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = KrakenRestClient::with_config(ClientConfig::from_env()?)?;

    let book = match client.get_trades(&pair, None).await {
        Ok(book) => book,
        Err(RestError::Api(err)) if err.is_unknown_pair() => {
            println!("{} {} is not a known pair", "✗".red(), pair);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let (buy, sell) = volume_split(&book.trades);
    println!(
        "{} {} trades, {} {}  {} {}",
        "✓".green(),
        book.trades.len(),
        "bought".green(),
        buy,
        "sold".red(),
        sell
    );
    for trade in &book.trades[book.trades.len().saturating_sub(SHOWN)..] {
        print_trade(trade);
    }

    let mut cursor = book.last;
    for _ in 0..POLLS {
        tokio::time::sleep(POLL_INTERVAL).await;

        let update = client.get_trades(&pair, Some(&cursor)).await?;
        for trade in &update.trades {
            print_trade(trade);
        }
        cursor = update.last;
    }

    println!("\n{} Demo complete.", "✓".green());
    Ok(())
}
