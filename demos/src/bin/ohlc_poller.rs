//! Demo 2: OHLC Poller
//!
//! Showcases: Incremental candle polling with the `last` cursor
//!
//! Run: cargo run --bin ohlc_poller [PAIR]

use colored::*;
use kraken_rest::{ClientConfig, KrakenRestClient, OhlcQuery};
use kraken_types::pairs::XXBTZEUR;
use kraken_types::{OhlcEntry, OhlcInterval};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const POLLS: usize = 5;
const POLL_INTERVAL: Duration = Duration::from_secs(20);

fn print_candle(entry: &OhlcEntry) {
    let time = entry
        .datetime()
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| entry.timestamp.to_string());
    let close = match entry.is_bullish() {
        Some(true) => entry.close.green(),
        Some(false) => entry.close.red(),
        None => entry.close.normal(),
    };
    println!(
        "  {}  O {}  H {}  L {}  C {}  {} {}",
        time.dimmed(),
        entry.open,
        entry.high,
        entry.low,
        close,
        "vol".dimmed(),
        entry.volume
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| XXBTZEUR.to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  OHLC POLLER".cyan().bold());
    println!("{}", format!("  {pair} 1-minute candles").cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = KrakenRestClient::with_config(ClientConfig::from_env()?)?;
    let mut query = OhlcQuery::new(pair.as_str()).with_interval(OhlcInterval::M1);

    let series = client.get_ohlc(&query).await?;
    println!(
        "{} {} candles, showing the last 5",
        "✓".green(),
        series.entries.len()
    );
    let committed = series.committed();
    for entry in &committed[committed.len().saturating_sub(5)..] {
        print_candle(entry);
    }
    if let Some(open) = series.current() {
        println!("  {}", "open candle:".dimmed());
        print_candle(open);
    }
    query = query.with_since(series.last);

    for poll in 1..=POLLS {
        tokio::time::sleep(POLL_INTERVAL).await;

        let update = client.get_ohlc(&query).await?;
        println!(
            "\n{} Poll {}/{}: {} candles since {}",
            "↻".yellow(),
            poll,
            POLLS,
            update.entries.len(),
            query.since.as_deref().unwrap_or("-")
        );
        for entry in &update.entries {
            print_candle(entry);
        }
        query = query.with_since(update.last);
    }

    println!("\n{} Demo complete.", "✓".green());
    Ok(())
}
