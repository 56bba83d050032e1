//! Ticker snapshots (`Ticker` endpoint)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::wire;

/// Ticker information for a trading pair
///
/// Every price and volume is the exchange's text, unchanged. Arrays have a
/// fixed length; a response with a different length fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerInfo {
    /// Ask [price, whole lot volume, lot volume]
    #[serde(rename = "a", deserialize_with = "wire::decimal_array")]
    pub ask: [String; 3],
    /// Bid [price, whole lot volume, lot volume]
    #[serde(rename = "b", deserialize_with = "wire::decimal_array")]
    pub bid: [String; 3],
    /// Last trade closed [price, lot volume]
    #[serde(rename = "c", deserialize_with = "wire::decimal_array")]
    pub last_trade: [String; 2],
    /// Volume [today, last 24 hours]
    #[serde(rename = "v", deserialize_with = "wire::decimal_array")]
    pub volume: [String; 2],
    /// Volume weighted average price [today, last 24 hours]
    #[serde(rename = "p", deserialize_with = "wire::decimal_array")]
    pub vwap: [String; 2],
    /// Number of trades [today, last 24 hours]
    #[serde(rename = "t")]
    pub trade_count: [u64; 2],
    /// Low [today, last 24 hours]
    #[serde(rename = "l", deserialize_with = "wire::decimal_array")]
    pub low: [String; 2],
    /// High [today, last 24 hours]
    #[serde(rename = "h", deserialize_with = "wire::decimal_array")]
    pub high: [String; 2],
    /// Today's opening price
    #[serde(rename = "o", deserialize_with = "wire::decimal")]
    pub opening_price: String,
}

impl TickerInfo {
    /// Get the current ask price
    pub fn ask_price(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.ask[0])
    }

    /// Get the current bid price
    pub fn bid_price(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.bid[0])
    }

    /// Get the last trade price
    pub fn last_price(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.last_trade[0])
    }

    /// Get the mid price (average of bid and ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let ask = self.ask_price()?;
        let bid = self.bid_price()?;
        Some((ask + bid) / Decimal::TWO)
    }

    /// Get the bid/ask spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.ask_price()? - self.bid_price()?)
    }

    /// Get spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        let mid = self.mid_price()?;
        if mid.is_zero() {
            return None;
        }
        Some(self.spread()? / mid * Decimal::from(10000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    const TICKER: &str = r#"{
        "XXBTZEUR": {
            "a": ["1430.00000", "2", "2.000"],
            "b": ["1428.10000", "1", "1.000"],
            "c": ["1429.99000", "0.04140000"],
            "v": ["1763.23281036", "3532.32412918"],
            "p": ["1426.65837", "1418.83394"],
            "t": [3591, 7451],
            "l": ["1410.00000", "1400.00100"],
            "h": ["1434.00000", "1434.00000"],
            "o": "1420.25000"
        }
    }"#;

    #[test]
    fn test_ticker_decoding_keeps_text() {
        let tickers: HashMap<String, TickerInfo> = serde_json::from_str(TICKER).unwrap();
        let ticker = &tickers["XXBTZEUR"];
        assert_eq!(ticker.ask[0], "1430.00000");
        assert_eq!(ticker.last_trade[1], "0.04140000");
        assert_eq!(ticker.trade_count, [3591, 7451]);
        assert_eq!(ticker.opening_price, "1420.25000");
    }

    #[test]
    fn test_ticker_prices() {
        let tickers: HashMap<String, TickerInfo> = serde_json::from_str(TICKER).unwrap();
        let ticker = &tickers["XXBTZEUR"];
        assert_eq!(ticker.ask_price(), Some(dec!(1430.00000)));
        assert_eq!(ticker.bid_price(), Some(dec!(1428.10000)));
        assert_eq!(ticker.last_price(), Some(dec!(1429.99)));
        assert_eq!(ticker.mid_price(), Some(dec!(1429.05)));
        assert_eq!(ticker.spread(), Some(dec!(1.9)));
        assert!(ticker.spread_bps().unwrap() > Decimal::ZERO);
    }

    #[test]
    fn test_ticker_accepts_numeric_decimals() {
        let json = TICKER
            .replace(r#""o": "1420.25000""#, r#""o": 1420.25000"#)
            .replace(r#""1763.23281036""#, "1763.23281036");
        let tickers: HashMap<String, TickerInfo> = serde_json::from_str(&json).unwrap();
        let ticker = &tickers["XXBTZEUR"];
        assert_eq!(ticker.opening_price, "1420.25000");
        assert_eq!(ticker.volume[0], "1763.23281036");
    }

    #[test]
    fn test_ticker_wrong_arity_fails() {
        let json = TICKER.replace(r#""c": ["1429.99000", "0.04140000"]"#, r#""c": ["1429.99000"]"#);
        assert!(serde_json::from_str::<HashMap<String, TickerInfo>>(&json).is_err());
    }

    #[test]
    fn test_ticker_missing_field_fails() {
        let json = TICKER.replace(r#""o": "1420.25000""#, r#""x": "1""#);
        assert!(serde_json::from_str::<HashMap<String, TickerInfo>>(&json).is_err());
    }
}
