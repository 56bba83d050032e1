//! Request parameter types for the public REST endpoints

use kraken_types::pairs::XXBTZEUR;
use kraken_types::OhlcInterval;
use serde::Serialize;

/// Query parameters for the `OHLC` endpoint
///
/// Defaults to `XXBTZEUR` at 1-minute candles with no cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OhlcQuery {
    /// Pair to get candles for
    pub pair: String,
    /// Candle width
    pub interval: OhlcInterval,
    /// Exclusive cursor: only candles committed after this `last` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
}

impl OhlcQuery {
    /// Query 1-minute candles for `pair`
    pub fn new(pair: impl Into<String>) -> Self {
        Self {
            pair: pair.into(),
            interval: OhlcInterval::default(),
            since: None,
        }
    }

    /// Set the candle width
    pub fn with_interval(mut self, interval: OhlcInterval) -> Self {
        self.interval = interval;
        self
    }

    /// Only return candles newer than a previous response's `last`
    pub fn with_since(mut self, since: impl ToString) -> Self {
        self.since = Some(since.to_string());
        self
    }
}

impl Default for OhlcQuery {
    fn default() -> Self {
        Self::new(XXBTZEUR)
    }
}

/// Query parameters for the `Ticker` endpoint
#[derive(Debug, Serialize)]
pub(crate) struct TickerParams {
    pub pair: String,
}

/// Query parameters for the `Depth` endpoint
#[derive(Debug, Serialize)]
pub(crate) struct DepthParams<'a> {
    pub pair: &'a str,
    pub count: u32,
}

/// Query parameters for the `Trades` endpoint
#[derive(Debug, Serialize)]
pub(crate) struct TradesParams<'a> {
    pub pair: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<&'a str>,
}
