//! Building blocks for decoding Kraken's positional JSON arrays

use rust_decimal::Decimal;
use serde::de::{self, Expected, IgnoredAny, SeqAccess, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A decimal quantity kept as the exact text the exchange sent
///
/// Kraken sends prices and volumes as JSON strings, occasionally as bare
/// numbers. Strings are taken verbatim. Numbers keep their wire digits
/// through serde_json's `arbitrary_precision`, so `0.10` stays `0.10`.
pub(crate) struct DecimalText(pub(crate) String);

impl<'de> Deserialize<'de> for DecimalText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a decimal string or number",
            )),
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
        Value::String(s) => Unexpected::Str(s),
        Value::Number(_) => Unexpected::Other("number"),
    }
}

/// Deserialize a fixed-length array of decimal texts
pub(crate) fn decimal_array<'de, D, const N: usize>(deserializer: D) -> Result<[String; N], D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<String> = Vec::<DecimalText>::deserialize(deserializer)?
        .into_iter()
        .map(|text| text.0)
        .collect();
    let len = items.len();
    items
        .try_into()
        .map_err(|_| de::Error::invalid_length(len, &ArrayLen(N)))
}

/// Deserialize a single decimal text
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    DecimalText::deserialize(deserializer).map(|text| text.0)
}

struct ArrayLen(usize);

impl Expected for ArrayLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an array of {} decimals", self.0)
    }
}

/// Read the element at `index` of a fixed-arity tuple
pub(crate) fn element<'de, A, T>(seq: &mut A, index: usize, expected: &dyn Expected) -> Result<T, A::Error>
where
    A: SeqAccess<'de>,
    T: Deserialize<'de>,
{
    seq.next_element()?
        .ok_or_else(|| de::Error::invalid_length(index, expected))
}

/// Fail if the tuple has more than `arity` elements
pub(crate) fn end<'de, A>(seq: &mut A, arity: usize, expected: &dyn Expected) -> Result<(), A::Error>
where
    A: SeqAccess<'de>,
{
    match seq.next_element::<IgnoredAny>()? {
        None => Ok(()),
        Some(_) => {
            let mut extra = 1;
            while seq.next_element::<IgnoredAny>()?.is_some() {
                extra += 1;
            }
            Err(de::Error::invalid_length(arity + extra, expected))
        }
    }
}

/// Parse decimal text, accepting scientific notation
pub(crate) fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
