//! Error types and error handling for the cafe service.
//!
//! Request errors carry the exact message returned to clients, so
//! their `Display` output is part of the HTTP contract. Conversion to
//! HTTP responses lives next to the error so the handler can simply
//! return `Result`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type alias for cafe service operations
pub type Result<T> = std::result::Result<T, CafeError>;

/// Main error type for the cafe service
#[derive(Error, Debug)]
pub enum CafeError {
    #[error("unknown city")]
    UnknownCity,

    #[error("incorrect count")]
    InvalidCount,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl CafeError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            CafeError::UnknownCity | CafeError::InvalidCount => StatusCode::BAD_REQUEST,
            CafeError::ConfigError(_) | CafeError::IoError(_) | CafeError::TomlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was caused by the request itself
    pub fn is_bad_request(&self) -> bool {
        matches!(self, CafeError::UnknownCity | CafeError::InvalidCount)
    }
}

/// Errors render as plain text with the bare message as the body
impl IntoResponse for CafeError {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}
