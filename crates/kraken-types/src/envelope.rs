//! The `{"error": [...], "result": ...}` envelope shared by every endpoint
//!
//! A non-empty `error` array always wins: the call failed and whatever sits
//! in `result` is ignored. Otherwise `result` must be present and is decoded
//! into the endpoint's type.

use serde::de::{DeserializeOwned, DeserializeSeed};
use serde::Deserialize;
use serde_json::Value;
use std::marker::PhantomData;

use crate::error::{DecodeError, DecodeResult};
use crate::error_codes::KrakenApiError;

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    error: Vec<String>,
    #[serde(default)]
    result: Option<Value>,
}

/// Decode a response body into the endpoint's result type
pub fn decode_response<T>(body: &[u8]) -> DecodeResult<T>
where
    T: DeserializeOwned,
{
    decode_response_with(body, PhantomData::<T>)
}

/// Decode a response body, driving the `result` through `seed`
///
/// Used where decoding needs request context, such as the OHLC result
/// whose data sits under the requested pair's key.
pub fn decode_response_with<'de, S>(body: &[u8], seed: S) -> DecodeResult<S::Value>
where
    S: DeserializeSeed<'de>,
{
    let envelope: RawEnvelope = serde_json::from_slice(body).map_err(DecodeError::from)?;

    if let Some(api_error) = KrakenApiError::from_errors(&envelope.error) {
        return Err(api_error.into());
    }

    match envelope.result {
        None | Some(Value::Null) => Err(DecodeError::MissingResult.into()),
        Some(result) => Ok(seed.deserialize(result).map_err(DecodeError::from)?),
    }
}
