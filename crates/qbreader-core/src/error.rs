use std::convert::Infallible;
use thiserror::Error;

/// Result type alias for QB Reader operations
pub type Result<T> = std::result::Result<T, QbError>;

/// Errors that can occur when building records or talking to the QB Reader API
#[derive(Error, Debug)]
pub enum QbError {
    /// A raw value was rejected: a category or difficulty outside its closed
    /// set, or a required identifier that was left empty
    #[error("invalid {kind} value: {value}")]
    InvalidValue {
        /// Which closed set rejected the value ("category", "difficulty", ...)
        kind: &'static str,
        /// The rejected raw value
        value: String,
    },

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimited,

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl QbError {
    pub(crate) fn invalid(kind: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
        }
    }

    /// Returns true if a raw value was rejected by a closed set
    #[must_use]
    pub const fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

// Lets an already-validated enum flow through the same `TryInto` bounds as raw input.
impl From<Infallible> for QbError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
