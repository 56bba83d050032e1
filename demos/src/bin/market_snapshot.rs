//! Demo 1: Market Snapshot
//!
//! Showcases: Server time, asset pair metadata, ticker and depth in one pass
//!
//! Run: cargo run --bin market_snapshot [PAIR]

use colored::*;
use kraken_rest::{ClientConfig, KrakenRestClient};
use kraken_types::pairs::XXBTZEUR;
use tracing_subscriber::EnvFilter;

const DEPTH: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pair = std::env::args().nth(1).unwrap_or_else(|| XXBTZEUR.to_string());

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  MARKET SNAPSHOT".cyan().bold());
    println!("{}", format!("  {pair} via Kraken public REST").cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = KrakenRestClient::with_config(ClientConfig::from_env()?)?;

    let time = client.get_server_time().await?;
    let skew = time.skew_from(chrono::Utc::now());
    println!("{} Server time {} (skew {}s)", "✓".green(), time, skew);

    let pairs = client.get_asset_pairs().await?;
    let Some(info) = pairs.get(&pair) else {
        println!("{} {} is not a tradable pair", "✗".red(), pair);
        return Ok(());
    };
    println!(
        "{} {} = {}/{}  lot {}  maker/taker fees: {}",
        "✓".green(),
        info.alt_name.bold(),
        info.base,
        info.quote,
        info.lot_size,
        if info.is_maker_taker() { "yes" } else { "no" }
    );
    if let Some(fee) = info.base_fee() {
        println!("  {} {}%", "Base fee:".dimmed(), fee);
    }
    println!();

    let tickers = client.get_ticker(&[pair.as_str()]).await?;
    if let Some(ticker) = tickers.get(&pair) {
        println!("{}", "  TICKER".yellow().bold());
        println!("  {} {}", "Last:".yellow(), ticker.last_trade[0]);
        println!("  {} {}", "Bid: ".yellow(), ticker.bid[0]);
        println!("  {} {}", "Ask: ".yellow(), ticker.ask[0]);
        if let Some(bps) = ticker.spread_bps() {
            println!("  {} {:.2} bps", "Spread:".green(), bps);
        }
        println!(
            "  {} {} today, {} trades",
            "Volume:".dimmed(),
            ticker.volume[0],
            ticker.trade_count[0]
        );
        println!();
    }

    let books = client.get_order_book(&pair, DEPTH).await?;
    if let Some(book) = books.get(&pair) {
        println!("{}", format!("  TOP {DEPTH} LEVELS").yellow().bold());
        for ask in book.asks.iter().rev() {
            println!("  {:>16}  {:>16}", ask.price.red(), ask.volume);
        }
        println!("  {}", "─".repeat(34).dimmed());
        for bid in &book.bids {
            println!("  {:>16}  {:>16}", bid.price.green(), bid.volume);
        }
        if let Some(mid) = book.mid_price() {
            println!("\n  {} {}", "Mid:".dimmed(), mid);
        }
    }

    println!("\n{} Snapshot complete.", "✓".green());
    Ok(())
}
