//! Pair codes for commonly traded markets
//!
//! These are the exchange's own pair identifiers as used in the `pair`
//! query parameter and as keys of result maps (REST API uses XBT, not BTC).

/// ETH/BTC
pub const XETHXXBT: &str = "XETHXXBT";
/// ETH/CAD
pub const XETHZCAD: &str = "XETHZCAD";
/// ETH/EUR
pub const XETHZEUR: &str = "XETHZEUR";
/// ETH/GBP
pub const XETHZGBP: &str = "XETHZGBP";
/// ETH/USD
pub const XETHZUSD: &str = "XETHZUSD";

/// ETC/BTC
pub const XETCXXBT: &str = "XETCXXBT";
/// ETC/CAD
pub const XETCZCAD: &str = "XETCZCAD";
/// ETC/EUR
pub const XETCZEUR: &str = "XETCZEUR";
/// ETC/GBP
pub const XETCZGBP: &str = "XETCZGBP";
/// ETC/USD
pub const XETCZUSD: &str = "XETCZUSD";

/// LTC/CAD
pub const XLTCZCAD: &str = "XLTCZCAD";
/// LTC/EUR
pub const XLTCZEUR: &str = "XLTCZEUR";
/// LTC/USD
pub const XLTCZUSD: &str = "XLTCZUSD";
/// BTC/LTC
pub const XXBTXLTC: &str = "XXBTXLTC";
/// BTC/CAD
pub const XXBTZCAD: &str = "XXBTZCAD";
/// BTC/EUR
pub const XXBTZEUR: &str = "XXBTZEUR";
/// BTC/GBP
pub const XXBTZGBP: &str = "XXBTZGBP";
/// BTC/USD
pub const XXBTZUSD: &str = "XXBTZUSD";

/// Join pair codes into the comma-separated form the API expects
///
/// Returns `None` for an empty list.
pub fn join_pairs<S: AsRef<str>>(pairs: &[S]) -> Option<String> {
    if pairs.is_empty() {
        return None;
    }
    Some(
        pairs
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<_>>()
            .join(","),
    )
}
