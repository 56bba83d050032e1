//! Kraken API error strings and their classification
//!
//! Kraken reports failures as strings of the form `ECATEGORY:Message`
//! inside the `error` array of every response envelope. This module keeps
//! the verbatim string and adds a parsed category and, when recognized, a
//! specific error code.

use thiserror::Error;

/// Prefix of a Kraken error string, before the first `:`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// `EAPI`: request rejected by the API gateway
    Api,
    /// `EGeneral`: bad arguments, unknown method or pair
    General,
    /// `EService`: exchange unavailable or overloaded
    Service,
    /// `EQuery`: unknown asset or pair in a query
    Query,
    /// `EOrder`
    Order,
    /// `EFunding`
    Funding,
    /// `ETrade`
    Trade,
    /// Anything without a recognized prefix
    Unknown,
}

impl ErrorCategory {
    fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "EAPI" => Self::Api,
            "EGeneral" => Self::General,
            "EService" => Self::Service,
            "EQuery" => Self::Query,
            "EOrder" => Self::Order,
            "EFunding" => Self::Funding,
            "ETrade" => Self::Trade,
            _ => Self::Unknown,
        }
    }
}

/// Error returned by the exchange in a well-formed envelope
///
/// `message` is the first entry of the envelope's `error` array, exactly as
/// sent. Any further entries are kept in `additional`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Kraken API error: {message}")]
pub struct KrakenApiError {
    /// The first error string from Kraken, verbatim
    pub message: String,
    /// Remaining error strings, in server order
    pub additional: Vec<String>,
    /// Error category
    pub category: ErrorCategory,
    /// Parsed error code (if recognized)
    pub code: Option<KrakenErrorCode>,
}

impl KrakenApiError {
    /// Parse a single Kraken error string
    pub fn parse(error: &str) -> Self {
        Self::with_additional(error, Vec::new())
    }

    /// Build from the first error string and every one after it
    pub fn with_additional(error: &str, additional: Vec<String>) -> Self {
        let category = match error.split_once(':') {
            Some((prefix, _)) => ErrorCategory::from_prefix(prefix),
            None => ErrorCategory::Unknown,
        };

        Self {
            message: error.to_string(),
            additional,
            category,
            code: KrakenErrorCode::from_error(error),
        }
    }

    /// Build from a whole `error` array; `None` when the array is empty
    pub fn from_errors(errors: &[String]) -> Option<Self> {
        let (first, rest) = errors.split_first()?;
        Some(Self::with_additional(first, rest.to_vec()))
    }

    /// The message text after the category prefix
    ///
    /// `"EQuery:Unknown asset pair"` yields `"Unknown asset pair"`.
    pub fn detail(&self) -> &str {
        match self.message.split_once(':') {
            Some((_, rest)) if self.category != ErrorCategory::Unknown => rest.trim(),
            _ => &self.message,
        }
    }

    /// All error strings the server sent, first one included
    pub fn all_messages(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.message.as_str()).chain(self.additional.iter().map(String::as_str))
    }

    /// Check if the request named a pair the exchange does not know
    pub fn is_unknown_pair(&self) -> bool {
        matches!(
            self.code,
            Some(KrakenErrorCode::QueryUnknownAssetPair) | Some(KrakenErrorCode::UnknownAssetPair)
        )
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        self.code.map(|c| c.is_rate_limit()).unwrap_or(false)
    }
}

/// Known Kraken error codes for the public endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KrakenErrorCode {
    /// EAPI:Rate limit exceeded
    RateLimitExceeded,
    /// EAPI:Bad request
    BadRequest,
    /// EAPI:Feature disabled
    FeatureDisabled,

    /// EGeneral:Invalid arguments
    InvalidArguments,
    /// EGeneral:Unknown asset pair
    UnknownAssetPair,
    /// EGeneral:Unknown asset
    UnknownAsset,
    /// EGeneral:Too many requests
    TooManyRequests,
    /// EGeneral:Temporary lockout
    TemporaryLockout,
    /// EGeneral:Unknown method
    UnknownMethod,
    /// EGeneral:Internal error
    InternalError,

    /// EService:Unavailable
    ServiceUnavailable,
    /// EService:Busy
    ServiceBusy,
    /// EService:Deadline elapsed
    DeadlineElapsed,
    /// EService:Timeout
    ServiceTimeout,

    /// EQuery:Unknown asset pair
    QueryUnknownAssetPair,
    /// EQuery:Unknown asset
    QueryUnknownAsset,
}

impl KrakenErrorCode {
    /// Recognize a Kraken error string
    pub fn from_error(error: &str) -> Option<Self> {
        Some(match error {
            "EAPI:Rate limit exceeded" => Self::RateLimitExceeded,
            "EAPI:Bad request" => Self::BadRequest,
            "EAPI:Feature disabled" => Self::FeatureDisabled,

            "EGeneral:Invalid arguments" => Self::InvalidArguments,
            "EGeneral:Unknown asset pair" => Self::UnknownAssetPair,
            "EGeneral:Unknown asset" => Self::UnknownAsset,
            "EGeneral:Too many requests" => Self::TooManyRequests,
            "EGeneral:Temporary lockout" => Self::TemporaryLockout,
            "EGeneral:Unknown method" => Self::UnknownMethod,
            "EGeneral:Internal error" => Self::InternalError,

            "EService:Unavailable" => Self::ServiceUnavailable,
            "EService:Busy" => Self::ServiceBusy,
            "EService:Deadline elapsed" => Self::DeadlineElapsed,
            "EService:Timeout" => Self::ServiceTimeout,

            "EQuery:Unknown asset pair" => Self::QueryUnknownAssetPair,
            "EQuery:Unknown asset" => Self::QueryUnknownAsset,

            // Kraken appends details to some messages, e.g.
            // "EGeneral:Invalid arguments:interval"
            _ => {
                let normalized = error.to_lowercase();
                if normalized.contains("rate limit") {
                    Self::RateLimitExceeded
                } else if normalized.starts_with("egeneral:invalid arguments") {
                    Self::InvalidArguments
                } else if normalized.starts_with("equery:unknown asset pair") {
                    Self::QueryUnknownAssetPair
                } else {
                    return None;
                }
            }
        })
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::RateLimitExceeded => "API rate limit exceeded",
            Self::BadRequest => "Malformed request",
            Self::FeatureDisabled => "Feature is disabled",
            Self::InvalidArguments => "Invalid request arguments",
            Self::UnknownAssetPair => "Unknown asset pair",
            Self::UnknownAsset => "Unknown asset",
            Self::TooManyRequests => "Too many requests",
            Self::TemporaryLockout => "Temporarily locked out",
            Self::UnknownMethod => "Unknown API method",
            Self::InternalError => "Kraken internal error",
            Self::ServiceUnavailable => "Service unavailable",
            Self::ServiceBusy => "Service busy",
            Self::DeadlineElapsed => "Request deadline elapsed",
            Self::ServiceTimeout => "Service timed out",
            Self::QueryUnknownAssetPair => "Queried asset pair not found",
            Self::QueryUnknownAsset => "Queried asset not found",
        }
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded | Self::TooManyRequests | Self::TemporaryLockout
        )
    }

    /// Check if the exchange side was unavailable rather than the request wrong
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable
                | Self::ServiceBusy
                | Self::DeadlineElapsed
                | Self::ServiceTimeout
                | Self::InternalError
        )
    }
}
