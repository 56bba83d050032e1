//! Recent trades (`Trades` endpoint)
//!
//! The result object has two kinds of keys: the pair code, whose value is
//! the trade array, and the fixed `last` cursor. The pair code is whatever
//! the exchange used, so it is recovered as "the key that is not `last`"
//! (a stray `error` key is skipped as well).

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::enums::Side;
use crate::wire::{self, DecimalText};

/// Sub-second digits kept from the wire timestamp (100 µs resolution)
const TIMESTAMP_TICKS_PER_SECOND: i64 = 10_000;
const NANOS_PER_TICK: i64 = 100_000;

/// Single executed trade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeEntry {
    /// Trade price
    pub price: String,
    /// Trade volume
    pub volume: String,
    /// Trade time, Unix nanoseconds at 100 µs resolution
    pub timestamp_nanos: i64,
    /// `"b"` for buy, `"s"` for sell
    pub buy_or_sell: String,
    /// `"m"` for market, `"l"` for limit
    pub market_or_limit: String,
    /// Miscellaneous info
    pub misc: String,
}

impl TradeEntry {
    /// Trade time as a UTC datetime
    pub fn datetime(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(self.timestamp_nanos)
    }

    /// Buy or sell, if the flag is one Kraken documents
    pub fn side(&self) -> Option<Side> {
        Side::from_flag(&self.buy_or_sell)
    }

    /// Returns true for market orders
    pub fn is_market(&self) -> bool {
        self.market_or_limit == "m"
    }

    /// Returns true for limit orders
    pub fn is_limit(&self) -> bool {
        self.market_or_limit == "l"
    }

    /// Trade price as a decimal
    pub fn price_decimal(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.price)
    }

    /// Trade volume as a decimal
    pub fn volume_decimal(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.volume)
    }
}

/// Convert fractional Unix seconds to nanoseconds
///
/// Only four sub-second digits are kept (truncated), then scaled to
/// nanoseconds: `1493926357.0243` becomes `1493926357_024_300_000`. The
/// arithmetic runs on the exact decimal text, never on an `f64`.
pub fn trade_timestamp_nanos(seconds: &str) -> Option<i64> {
    let seconds = wire::parse_decimal(seconds)?;
    let ticks = seconds
        .checked_mul(Decimal::from(TIMESTAMP_TICKS_PER_SECOND))?
        .trunc()
        .to_i64()?;
    ticks.checked_mul(NANOS_PER_TICK)
}

impl<'de> Deserialize<'de> for TradeEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TradeEntryVisitor;

        impl<'de> Visitor<'de> for TradeEntryVisitor {
            type Value = TradeEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 6-element trade tuple [price, volume, time, buy/sell, market/limit, misc]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<TradeEntry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let price: DecimalText = wire::element(&mut seq, 0, &self)?;
                let volume: DecimalText = wire::element(&mut seq, 1, &self)?;
                let time: serde_json::Number = wire::element(&mut seq, 2, &self)?;
                let buy_or_sell: String = wire::element(&mut seq, 3, &self)?;
                let market_or_limit: String = wire::element(&mut seq, 4, &self)?;
                let misc: String = wire::element(&mut seq, 5, &self)?;
                wire::end(&mut seq, 6, &self)?;

                let Some(timestamp_nanos) = trade_timestamp_nanos(&time.to_string()) else {
                    return Err(de::Error::custom(format!("trade time {time} out of range")));
                };

                Ok(TradeEntry {
                    price: price.0,
                    volume: volume.0,
                    timestamp_nanos,
                    buy_or_sell,
                    market_or_limit,
                    misc,
                })
            }
        }

        deserializer.deserialize_seq(TradeEntryVisitor)
    }
}

/// Recent trades for one pair plus the polling cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeBook {
    /// Pair code, taken from the result's non-`last` key
    pub pair: String,
    /// Trades in server order
    pub trades: Vec<TradeEntry>,
    /// Pass as `since` to receive only newer trades
    pub last: String,
}

impl<'de> Deserialize<'de> for TradeBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TradeBookVisitor;

        impl<'de> Visitor<'de> for TradeBookVisitor {
            type Value = TradeBook;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a trades result object with one pair key and 'last'")
            }

            fn visit_map<A>(self, mut map: A) -> Result<TradeBook, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut book: Option<(String, Vec<TradeEntry>)> = None;
                let mut last: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    if key == "last" {
                        if last.is_some() {
                            return Err(de::Error::duplicate_field("last"));
                        }
                        last = Some(map.next_value()?);
                        continue;
                    }
                    if key == "error" {
                        map.next_value::<IgnoredAny>()?;
                        continue;
                    }
                    if let Some((pair, _)) = &book {
                        return Err(de::Error::custom(format!(
                            "unexpected second pair key '{key}' in trades result (already have '{pair}')"
                        )));
                    }
                    book = Some((key, map.next_value()?));
                }

                let Some((pair, trades)) = book else {
                    return Err(de::Error::custom("missing pair key in trades result"));
                };
                let Some(last) = last else {
                    return Err(de::Error::missing_field("last"));
                };

                Ok(TradeBook { pair, trades, last })
            }
        }

        deserializer.deserialize_map(TradeBookVisitor)
    }
}
