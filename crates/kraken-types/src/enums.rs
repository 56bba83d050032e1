//! Side and OHLC interval enums

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Trade side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Parse the single-letter flag used in trade tuples (`"b"` / `"s"`)
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "b" => Some(Self::Buy),
            "s" => Some(Self::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

/// Candle width accepted by the OHLC endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OhlcInterval {
    /// 1 minute
    #[default]
    M1 = 1,
    /// 5 minutes
    M5 = 5,
    /// 15 minutes
    M15 = 15,
    /// 30 minutes
    M30 = 30,
    /// 1 hour
    H1 = 60,
    /// 4 hours
    H4 = 240,
    /// 1 day
    D1 = 1440,
    /// 1 week
    W1 = 10080,
    /// 15 days
    D15 = 21600,
}

impl OhlcInterval {
    /// Every interval the exchange accepts, shortest first
    pub const ALL: [OhlcInterval; 9] = [
        Self::M1,
        Self::M5,
        Self::M15,
        Self::M30,
        Self::H1,
        Self::H4,
        Self::D1,
        Self::W1,
        Self::D15,
    ];

    /// Returns the interval length in minutes
    pub fn minutes(&self) -> u32 {
        *self as u32
    }

    /// Returns the interval length in seconds
    pub fn seconds(&self) -> i64 {
        i64::from(self.minutes()) * 60
    }
}

impl TryFrom<u32> for OhlcInterval {
    type Error = InvalidInterval;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.minutes() == minutes)
            .ok_or(InvalidInterval(minutes))
    }
}

impl fmt::Display for OhlcInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

// Sent as the bare number of minutes in the query string
impl Serialize for OhlcInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.minutes())
    }
}

/// Minute count outside the accepted interval set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid OHLC interval: {0} minutes (expected one of 1, 5, 15, 30, 60, 240, 1440, 10080, 21600)")]
pub struct InvalidInterval(pub u32);
