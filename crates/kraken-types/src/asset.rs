//! Server time, asset and asset pair reference data

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::wire::{self, DecimalText};

/// Server time (`Time` endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTime {
    /// Unix timestamp in seconds
    pub unixtime: i64,
    /// RFC 1123 time string
    pub rfc1123: String,
}

impl ServerTime {
    /// Server time as a UTC datetime
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.unixtime, 0).single()
    }

    /// Server clock minus `local`, in seconds
    pub fn skew_from(&self, local: DateTime<Utc>) -> i64 {
        self.unixtime - local.timestamp()
    }
}

impl fmt::Display for ServerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unixtime: {}, rfc1123: {}", self.unixtime, self.rfc1123)
    }
}

/// Asset information (`Assets` endpoint), keyed by asset code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Alternate name
    #[serde(rename = "altname")]
    pub alt_name: String,
    /// Asset class
    #[serde(rename = "aclass")]
    pub asset_class: String,
    /// Scaling decimal places for record keeping
    pub decimals: u32,
    /// Scaling decimal places for output display
    pub display_decimals: u32,
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "altname: {}, aclass: {}, decimals: {}, display: {}",
            self.alt_name, self.asset_class, self.decimals, self.display_decimals
        )
    }
}

/// One step of a volume-based fee schedule
///
/// On the wire this is a `[volume, percent]` pair of numbers. Both values
/// are kept as text so that re-encoding writes back the same digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTier {
    /// 30-day volume threshold at which this tier starts
    pub volume: String,
    /// Fee in percent
    pub percent: String,
}

impl FeeTier {
    /// Volume threshold as a decimal
    pub fn volume_decimal(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.volume)
    }

    /// Fee percentage as a decimal
    pub fn percent_decimal(&self) -> Option<Decimal> {
        wire::parse_decimal(&self.percent)
    }
}

impl<'de> Deserialize<'de> for FeeTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeeTierVisitor;

        impl<'de> Visitor<'de> for FeeTierVisitor {
            type Value = FeeTier;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [volume, percent] fee tier")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<FeeTier, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let volume: DecimalText = wire::element(&mut seq, 0, &self)?;
                let percent: DecimalText = wire::element(&mut seq, 1, &self)?;
                wire::end(&mut seq, 2, &self)?;
                Ok(FeeTier {
                    volume: volume.0,
                    percent: percent.0,
                })
            }
        }

        deserializer.deserialize_seq(FeeTierVisitor)
    }
}

impl Serialize for FeeTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        serialize_number_text(&mut tuple, &self.volume)?;
        serialize_number_text(&mut tuple, &self.percent)?;
        tuple.end()
    }
}

// Writes the text back as a JSON number when it is one, as a string otherwise
fn serialize_number_text<T>(tuple: &mut T, text: &str) -> Result<(), T::Error>
where
    T: SerializeTuple,
{
    match serde_json::Number::from_str(text) {
        Ok(number) => tuple.serialize_element(&number),
        Err(_) => tuple.serialize_element(text),
    }
}

/// Tradable asset pair (`AssetPairs` endpoint), keyed by pair code
///
/// If a pair is on a maker/taker fee schedule, the taker side is given in
/// `fees` and the maker side in `fees_maker`. Other pairs only have `fees`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPairInfo {
    /// Alternate pair name
    #[serde(rename = "altname")]
    pub alt_name: String,
    /// WebSocket pair name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wsname: Option<String>,
    /// Asset class of base component
    #[serde(rename = "aclass_base")]
    pub base_asset_class: String,
    /// Asset id of base component
    pub base: String,
    /// Asset class of quote component
    #[serde(rename = "aclass_quote")]
    pub quote_asset_class: String,
    /// Asset id of quote component
    pub quote: String,
    /// Volume lot size
    #[serde(rename = "lot")]
    pub lot_size: String,
    /// Scaling decimal places for pair
    pub pair_decimals: u32,
    /// Scaling decimal places for volume
    pub lot_decimals: u32,
    /// Amount to multiply lot volume by to get currency volume
    pub lot_multiplier: u32,
    /// Leverage amounts available when buying
    pub leverage_buy: Vec<u32>,
    /// Leverage amounts available when selling
    pub leverage_sell: Vec<u32>,
    /// Fee schedule (taker side on maker/taker pairs)
    pub fees: Vec<FeeTier>,
    /// Maker fee schedule, only for maker/taker pairs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_maker: Option<Vec<FeeTier>>,
    /// Volume discount currency
    pub fee_volume_currency: String,
    /// Margin call level
    pub margin_call: u32,
    /// Stop-out/liquidation margin level
    pub margin_stop: u32,
    /// Minimum order volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordermin: Option<String>,
    /// Minimum order cost in quote currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costmin: Option<String>,
    /// Minimum price increment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<String>,
    /// Trading status (online, cancel_only, post_only, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl AssetPairInfo {
    /// Returns true if the pair has separate maker and taker fees
    pub fn is_maker_taker(&self) -> bool {
        self.fees_maker.is_some()
    }

    /// Fee in percent for the lowest volume tier
    pub fn base_fee(&self) -> Option<Decimal> {
        self.fees.first().and_then(FeeTier::percent_decimal)
    }

    /// Minimum order volume as a decimal
    pub fn min_order(&self) -> Option<Decimal> {
        self.ordermin.as_deref().and_then(wire::parse_decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    const XBTEUR_PAIR: &str = r#"{
        "altname": "XBTEUR",
        "wsname": "XBT/EUR",
        "aclass_base": "currency",
        "base": "XXBT",
        "aclass_quote": "currency",
        "quote": "ZEUR",
        "lot": "unit",
        "pair_decimals": 1,
        "lot_decimals": 8,
        "lot_multiplier": 1,
        "leverage_buy": [2, 3, 4, 5],
        "leverage_sell": [2, 3, 4, 5],
        "fees": [[0, 0.26], [50000, 0.24], [100000, 0.22]],
        "fees_maker": [[0, 0.16], [50000, 0.14]],
        "fee_volume_currency": "ZUSD",
        "margin_call": 80,
        "margin_stop": 40,
        "ordermin": "0.0001"
    }"#;

    #[test]
    fn test_server_time() {
        let time: ServerTime =
            serde_json::from_str(r#"{"unixtime":1493752708,"rfc1123":"Tue,  2 May 17 19:18:28 +0000"}"#)
                .unwrap();
        assert_eq!(time.unixtime, 1493752708);
        assert_eq!(time.datetime().unwrap().timestamp(), 1493752708);
        assert_eq!(time.to_string(), "unixtime: 1493752708, rfc1123: Tue,  2 May 17 19:18:28 +0000");

        let local = Utc.timestamp_opt(1493752700, 0).single().unwrap();
        assert_eq!(time.skew_from(local), 8);
    }

    #[test]
    fn test_server_time_missing_field() {
        assert!(serde_json::from_str::<ServerTime>(r#"{"unixtime":1493752708}"#).is_err());
    }

    #[test]
    fn test_asset_info_round_trip() {
        let source = json!({"altname": "XBT", "aclass": "currency", "decimals": 10, "display_decimals": 5});
        let asset: AssetInfo = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(asset.alt_name, "XBT");
        assert_eq!(asset.asset_class, "currency");
        assert_eq!(asset.to_string(), "altname: XBT, aclass: currency, decimals: 10, display: 5");
        assert_eq!(serde_json::to_value(&asset).unwrap(), source);
    }

    #[test]
    fn test_asset_pair_decoding() {
        let pair: AssetPairInfo = serde_json::from_str(XBTEUR_PAIR).unwrap();
        assert_eq!(pair.base, "XXBT");
        assert_eq!(pair.quote, "ZEUR");
        assert_eq!(pair.lot_size, "unit");
        assert_eq!(pair.leverage_buy, vec![2, 3, 4, 5]);
        assert_eq!(pair.fees.len(), 3);
        assert_eq!(pair.fees[1].volume, "50000");
        assert_eq!(pair.fees[1].percent, "0.24");
        assert!(pair.is_maker_taker());
        assert_eq!(pair.base_fee(), Some(dec!(0.26)));
        assert_eq!(pair.min_order(), Some(dec!(0.0001)));
        assert_eq!(pair.tick_size, None);
    }

    #[test]
    fn test_asset_pair_round_trip() {
        let source: serde_json::Value = serde_json::from_str(XBTEUR_PAIR).unwrap();
        let pair: AssetPairInfo = serde_json::from_value(source.clone()).unwrap();
        assert_eq!(serde_json::to_value(&pair).unwrap(), source);
    }

    #[test]
    fn test_asset_pair_without_maker_fees() {
        let mut source: serde_json::Value = serde_json::from_str(XBTEUR_PAIR).unwrap();
        source.as_object_mut().unwrap().remove("fees_maker");
        let pair: AssetPairInfo = serde_json::from_value(source.clone()).unwrap();
        assert!(!pair.is_maker_taker());
        assert_eq!(serde_json::to_value(&pair).unwrap(), source);
    }

    #[test]
    fn test_asset_pair_missing_required_field() {
        let mut source: serde_json::Value = serde_json::from_str(XBTEUR_PAIR).unwrap();
        source.as_object_mut().unwrap().remove("margin_stop");
        assert!(serde_json::from_value::<AssetPairInfo>(source).is_err());
    }

    #[test]
    fn test_fee_tier_arity() {
        assert!(serde_json::from_str::<FeeTier>("[0]").is_err());
        assert!(serde_json::from_str::<FeeTier>("[0, 0.26, 1]").is_err());
        let tier: FeeTier = serde_json::from_str(r#"["0", "0.26"]"#).unwrap();
        assert_eq!(tier.percent_decimal(), Some(dec!(0.26)));
    }

    #[test]
    fn test_fee_tier_keeps_wire_digits() {
        let tier: FeeTier = serde_json::from_str("[10000000, 0.10]").unwrap();
        assert_eq!(tier.volume, "10000000");
        assert_eq!(tier.percent, "0.10");
        assert_eq!(serde_json::to_string(&tier).unwrap(), "[10000000,0.10]");

        let tier: FeeTier = serde_json::from_str("[0, 0.12345678901234567891]").unwrap();
        assert_eq!(tier.percent, "0.12345678901234567891");
    }

    #[test]
    fn test_fee_schedule_reencodes_same_text() {
        let wire = r#"[[0,0.26],[50000,0.240],[10000000,0.10]]"#;
        let fees: Vec<FeeTier> = serde_json::from_str(wire).unwrap();
        assert_eq!(fees[1].percent, "0.240");
        assert_eq!(serde_json::to_string(&fees).unwrap(), wire);
    }
}
