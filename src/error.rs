//! Error types for the PickMe CLI

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for application-level operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias used inside the API client, before envelope conversion
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A client operation returned a failed result envelope
    #[error("{message}")]
    Request { kind: ErrorKind, message: String },

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

/// Form field a validation failure could be attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Alias,
    Password,
}

/// Failure category surfaced to callers through the result envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    RateLimited,
    Unauthorized,
    Validation(Option<Field>),
    Forbidden,
    NotFound,
    Server,
    Rejected,
    InvalidRequest,
    InvalidResponse,
}

/// API-related errors.
///
/// Display strings are user-facing: they become the `message` of a failed
/// envelope, so transport details stay out of them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error, check your connection")]
    Network(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("Not logged in. Run `pickme login` first.")]
    MissingToken,

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Validation {
        field: Option<Field>,
        message: String,
    },

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Failed to encode request: {0}")]
    Encoding(String),

    #[error("Invalid response from server")]
    InvalidResponse(String),
}

impl ApiError {
    /// Failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::RateLimited(_) => ErrorKind::RateLimited,
            ApiError::MissingToken | ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
            ApiError::Validation { field, .. } => ErrorKind::Validation(*field),
            ApiError::Forbidden(_) => ErrorKind::Forbidden,
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::Server(_) => ErrorKind::Server,
            ApiError::Rejected(_) => ErrorKind::Rejected,
            ApiError::Encoding(_) => ErrorKind::InvalidRequest,
            ApiError::InvalidResponse(_) => ErrorKind::InvalidResponse,
        }
    }

    /// Whether the retry policy may re-issue the request
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `pickme login` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Not logged in. Run `pickme login` first.")]
    NotLoggedIn,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
