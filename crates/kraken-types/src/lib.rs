//! Market data types and response decoders for Kraken's public REST API
//!
//! This crate turns raw response bodies into typed values. It does no I/O
//! and can be used independently of any HTTP client.
//!
//! # Key Types
//!
//! - [`decode_response`] - Envelope unwrapping shared by every endpoint
//! - [`ServerTime`], [`AssetInfo`], [`AssetPairInfo`] - Reference data
//! - [`TickerInfo`] - Ticker snapshots
//! - [`OhlcSeries`], [`OhlcEntry`] - Candles with a polling cursor
//! - [`OrderBook`], [`OrderBookEntry`] - Depth snapshots
//! - [`TradeBook`], [`TradeEntry`] - Recent trades with a polling cursor
//! - [`DecodeError`], [`KrakenApiError`], [`ResponseError`] - Error types
//!
//! Prices, volumes and fees are kept as the exact text the exchange sent.
//! Accessors such as [`TickerInfo::ask_price`] parse them into [`Decimal`]
//! on demand.

pub mod asset;
pub mod book;
pub mod enums;
pub mod envelope;
pub mod error;
pub mod error_codes;
pub mod ohlc;
pub mod pairs;
pub mod ticker;
pub mod trade;

mod wire;

// Re-export commonly used types
pub use asset::*;
pub use book::*;
pub use enums::*;
pub use envelope::*;
pub use error::*;
pub use error_codes::*;
pub use ohlc::*;
pub use ticker::*;
pub use trade::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
