//! Error types for REST API operations

use kraken_types::{DecodeError, KrakenApiError, ResponseError};

/// Errors that can occur during REST API operations
///
/// Every call either succeeds with a fully typed result or fails with
/// exactly one of these. Nothing is retried or swallowed.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Invalid request parameters, rejected before any network call
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// HTTP request failed (network, DNS, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not have the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// API returned an error
    #[error(transparent)]
    Api(#[from] KrakenApiError),
}

impl From<ResponseError> for RestError {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::Decode(e) => Self::Decode(e),
            ResponseError::Api(e) => Self::Api(e),
        }
    }
}

impl RestError {
    /// Get the exchange error, if this is one
    pub fn api_error(&self) -> Option<&KrakenApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Check if the exchange rejected the call
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Api(error) if error.is_rate_limit())
    }

    /// Check if the request timed out in the transport
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(error) if error.is_timeout())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_verbatim() {
        let err = RestError::from(ResponseError::from(KrakenApiError::parse(
            "EQuery:Unknown asset pair",
        )));
        assert!(err.is_api_error());
        assert_eq!(err.api_error().unwrap().message, "EQuery:Unknown asset pair");
        assert_eq!(err.to_string(), "Kraken API error: EQuery:Unknown asset pair");
    }

    #[test]
    fn test_rate_limited() {
        let err = RestError::from(KrakenApiError::parse("EAPI:Rate limit exceeded"));
        assert!(err.is_rate_limited());

        let err = RestError::InvalidParameter("pair".into());
        assert!(!err.is_rate_limited());
        assert!(!err.is_api_error());
    }

    #[test]
    fn test_decode_error_conversion() {
        let err = RestError::from(ResponseError::from(DecodeError::MissingResult));
        assert!(matches!(err, RestError::Decode(DecodeError::MissingResult)));
        assert!(err.to_string().starts_with("Decode error"));
    }
}
