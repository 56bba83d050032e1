//! Error types for response decoding

use thiserror::Error;

use crate::error_codes::KrakenApiError;

/// The response bytes did not have the expected shape
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed JSON, wrong tuple arity, missing or unexpected keys
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The envelope reported no error but carried no result either
    #[error("Response has neither errors nor a result")]
    MissingResult,
}

/// Outcome of decoding one response envelope
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The payload could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The exchange answered with a non-empty `error` array
    #[error(transparent)]
    Api(#[from] KrakenApiError),
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(DecodeError::InvalidJson(err))
    }
}

impl ResponseError {
    /// Get the exchange error, if this is one
    pub fn api_error(&self) -> Option<&KrakenApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Decode(_) => None,
        }
    }

    /// Returns true if the payload itself was malformed
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result type alias for decoding operations
pub type DecodeResult<T> = Result<T, ResponseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_passes_through_display() {
        let err = ResponseError::from(KrakenApiError::parse("EQuery:Unknown asset pair"));
        assert_eq!(err.to_string(), "Kraken API error: EQuery:Unknown asset pair");
        assert!(err.api_error().is_some());
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_json_error_is_decode_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ResponseError::from(json_err);
        assert!(err.is_decode_error());
        assert!(err.to_string().starts_with("Invalid JSON"));
    }
}
