//! Order book depth (`Depth` endpoint)

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;

use crate::envelope::decode_response;
use crate::error::DecodeResult;
use crate::wire::{self, DecimalText};

/// Single price level: `[price, volume, timestamp]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBookEntry {
    /// Price of this level
    pub price: String,
    /// Volume at this price level
    pub volume: String,
    /// Last update of this level, Unix seconds
    pub timestamp: i64,
}

impl OrderBookEntry {
    /// Price as a decimal
    pub fn price_decimal(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.price)
    }

    /// Volume as a decimal
    pub fn volume_decimal(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.volume)
    }

    /// Last update as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp, 0).single()
    }
}

impl<'de> Deserialize<'de> for OrderBookEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = OrderBookEntry;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 3-element order book level [price, volume, timestamp]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<OrderBookEntry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let price: DecimalText = wire::element(&mut seq, 0, &self)?;
                let volume: DecimalText = wire::element(&mut seq, 1, &self)?;
                let timestamp: i64 = wire::element(&mut seq, 2, &self)?;
                wire::end(&mut seq, 3, &self)?;

                Ok(OrderBookEntry {
                    price: price.0,
                    volume: volume.0,
                    timestamp,
                })
            }
        }

        deserializer.deserialize_seq(EntryVisitor)
    }
}

/// Asks and bids for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBook {
    /// Pair code (the key this book was returned under)
    pub pair: String,
    /// Ask side, in server order (best first)
    pub asks: Vec<OrderBookEntry>,
    /// Bid side, in server order (best first)
    pub bids: Vec<OrderBookEntry>,
}

impl OrderBook {
    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first()?.price_decimal()
    }

    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first()?.price_decimal()
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }

    /// Get the mid price
    pub fn mid_price(&self) -> Option<Decimal> {
        Some((self.best_ask()? + self.best_bid()?) / Decimal::TWO)
    }
}

// Wire shape of one book: `{"asks": [...], "bids": [...]}`
#[derive(Deserialize)]
struct BookSides {
    asks: Vec<OrderBookEntry>,
    bids: Vec<OrderBookEntry>,
}

/// Decode a whole Depth response body
///
/// Each book is tagged with the pair code it was keyed under.
pub fn decode_depth_response(body: &[u8]) -> DecodeResult<HashMap<String, OrderBook>> {
    let books: HashMap<String, BookSides> = decode_response(body)?;
    Ok(books
        .into_iter()
        .map(|(pair, sides)| {
            let book = OrderBook {
                pair: pair.clone(),
                asks: sides.asks,
                bids: sides.bids,
            };
            (pair, book)
        })
        .collect())
}
