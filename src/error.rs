//! Error handling for webreq

use thiserror::Error;

/// Main error type for webreq operations
///
/// Mutators never produce errors of their own; every variant here is raised by
/// the request record when a property is assigned, by the profile loader, or
/// by the hand-off to reqwest.
#[derive(Error, Debug)]
pub enum WebReqError {
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    #[error("Invalid header name: {0}")]
    InvalidHeaderName(String),

    #[error("Invalid value for header '{name}': {value:?}")]
    InvalidHeaderValue { name: String, value: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid value for {property}: {reason}")]
    InvalidValue {
        property: &'static str,
        reason: String,
    },

    #[error("Unsupported protocol version: {0}")]
    UnsupportedVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl WebReqError {
    pub(crate) fn invalid_value(property: &'static str, reason: impl Into<String>) -> Self {
        WebReqError::InvalidValue {
            property,
            reason: reason.into(),
        }
    }
}

/// Result type alias for webreq operations
pub type Result<T> = std::result::Result<T, WebReqError>;
