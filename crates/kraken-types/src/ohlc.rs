//! OHLC candles (`OHLC` endpoint)
//!
//! The result is an object holding the candle array under the requested
//! pair's code plus a `last` cursor:
//!
//! ```text
//! {"XXBTZEUR": [[time, open, high, low, close, vwap, volume, count], ...], "last": 1493829480}
//! ```

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::de::{self, DeserializeSeed, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::envelope::decode_response_with;
use crate::error::DecodeResult;
use crate::wire::{self, DecimalText};

/// Single OHLC candle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcEntry {
    /// Candle open time, Unix seconds
    pub timestamp: i64,
    /// Open price
    pub open: String,
    /// High price
    pub high: String,
    /// Low price
    pub low: String,
    /// Close price
    pub close: String,
    /// Volume weighted average price
    pub vwap: String,
    /// Volume
    pub volume: String,
    /// Number of trades
    pub trade_count: u64,
}

impl OhlcEntry {
    /// Candle open time as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp, 0).single()
    }

    /// Open price as a decimal
    pub fn open_price(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.open)
    }

    /// Close price as a decimal
    pub fn close_price(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.close)
    }

    /// High minus low
    pub fn range(&self) -> Option<Decimal> {
        Some(wire::parse_decimal(&self.high)? - wire::parse_decimal(&self.low)?)
    }

    /// Returns true if the candle closed at or above its open
    pub fn is_bullish(&self) -> Option<bool> {
        Some(self.close_price()? >= self.open_price()?)
    }
}

impl<'de> Deserialize<'de> for OhlcEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OhlcEntryVisitor;

        impl<'de> Visitor<'de> for OhlcEntryVisitor {
            type Value = OhlcEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an 8-element OHLC tuple [time, open, high, low, close, vwap, volume, count]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<OhlcEntry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let timestamp: i64 = wire::element(&mut seq, 0, &self)?;
                let open: DecimalText = wire::element(&mut seq, 1, &self)?;
                let high: DecimalText = wire::element(&mut seq, 2, &self)?;
                let low: DecimalText = wire::element(&mut seq, 3, &self)?;
                let close: DecimalText = wire::element(&mut seq, 4, &self)?;
                let vwap: DecimalText = wire::element(&mut seq, 5, &self)?;
                let volume: DecimalText = wire::element(&mut seq, 6, &self)?;
                let trade_count: u64 = wire::element(&mut seq, 7, &self)?;
                wire::end(&mut seq, 8, &self)?;

                Ok(OhlcEntry {
                    timestamp,
                    open: open.0,
                    high: high.0,
                    low: low.0,
                    close: close.0,
                    vwap: vwap.0,
                    volume: volume.0,
                    trade_count,
                })
            }
        }

        deserializer.deserialize_seq(OhlcEntryVisitor)
    }
}

/// Candles for one pair plus the polling cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcSeries {
    /// Pair code the candles belong to
    pub pair: String,
    /// Candles in server order; the final one is the current, still open frame
    pub entries: Vec<OhlcEntry>,
    /// Pass as `since` to receive only newer committed candles
    pub last: i64,
}

impl OhlcSeries {
    /// All candles except the still open final one
    pub fn committed(&self) -> &[OhlcEntry] {
        match self.entries.split_last() {
            Some((_, committed)) => committed,
            None => &[],
        }
    }

    /// The current, not yet committed candle
    pub fn current(&self) -> Option<&OhlcEntry> {
        self.entries.last()
    }
}

/// Decodes an OHLC result for a pair known from the request
///
/// Looks the pair up by key rather than guessing which key is not `last`.
/// Keys other than the pair and `last` are ignored.
pub struct OhlcSeriesSeed<'a> {
    pair: &'a str,
}

impl<'a> OhlcSeriesSeed<'a> {
    /// Create a seed for the given pair code
    pub fn new(pair: &'a str) -> Self {
        Self { pair }
    }
}

impl<'de, 'a> DeserializeSeed<'de> for OhlcSeriesSeed<'a> {
    type Value = OhlcSeries;

    fn deserialize<D>(self, deserializer: D) -> Result<OhlcSeries, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }
}

impl<'de, 'a> Visitor<'de> for OhlcSeriesSeed<'a> {
    type Value = OhlcSeries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an OHLC result object with keys '{}' and 'last'", self.pair)
    }

    fn visit_map<A>(self, mut map: A) -> Result<OhlcSeries, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Option<Vec<OhlcEntry>> = None;
        let mut last: Option<i64> = None;

        while let Some(key) = map.next_key::<String>()? {
            if key == "last" {
                if last.is_some() {
                    return Err(de::Error::duplicate_field("last"));
                }
                last = Some(map.next_value()?);
            } else if key == self.pair {
                if entries.is_some() {
                    return Err(de::Error::custom(format!("duplicate pair key '{}'", self.pair)));
                }
                entries = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        let Some(entries) = entries else {
            return Err(de::Error::custom(format!(
                "missing pair '{}' in OHLC result",
                self.pair
            )));
        };
        let Some(last) = last else {
            return Err(de::Error::missing_field("last"));
        };

        Ok(OhlcSeries {
            pair: self.pair.to_string(),
            entries,
            last,
        })
    }
}

/// Decode a whole OHLC response body for `pair`
pub fn decode_ohlc_response(body: &[u8], pair: &str) -> DecodeResult<OhlcSeries> {
    decode_response_with(body, OhlcSeriesSeed::new(pair))
}
