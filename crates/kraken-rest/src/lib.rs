//! REST API client for Kraken's public market data endpoints
//!
//! Each method builds one GET request, sends it, and decodes the
//! `{"error": [...], "result": ...}` envelope into a typed value using
//! [`kraken_types`].
//!
//! # Features
//!
//! - **Reference data**: Server time, assets, tradable pairs
//! - **Market data**: Ticker, orderbook, OHLC, recent trades
//!
//! # Example
//!
//! ```no_run
//! use kraken_rest::{KrakenRestClient, OhlcQuery};
//! use kraken_types::OhlcInterval;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KrakenRestClient::new();
//!
//!     let time = client.get_server_time().await?;
//!     println!("Server time: {}", time);
//!
//!     let query = OhlcQuery::new("XXBTZEUR").with_interval(OhlcInterval::H1);
//!     let candles = client.get_ohlc(&query).await?;
//!     println!("{} candles, next cursor {}", candles.entries.len(), candles.last);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every call returns exactly one [`RestError`]: an invalid parameter
//! (checked before any network call), a transport failure, a malformed
//! response, or the exchange's own error string.
//!
//! There is no retry, rate limiting or caching. Timeouts are configured on
//! the HTTP client through [`ClientConfig`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, KrakenRestClient};
pub use endpoints::MarketEndpoints;
pub use error::{RestError, RestResult};
pub use types::OhlcQuery;

// Re-export endpoint-specific types
pub use kraken_types::{
    // Reference data
    AssetInfo, AssetPairInfo, FeeTier, ServerTime,
    // Market data
    OhlcEntry, OhlcInterval, OhlcSeries, OrderBook, OrderBookEntry, TickerInfo, TradeBook,
    TradeEntry,
    // Errors
    DecodeError, KrakenApiError,
};
