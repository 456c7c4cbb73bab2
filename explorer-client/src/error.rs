//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Response decoded but is inconsistent (e.g. found without a product)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Fetch or parse failure against the catalog API
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Upstream { .. } | Self::InvalidResponse(_) | Self::Serialization(_)
        )
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err {
            ClientError::Http(e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, message)
            }
            ClientError::Upstream { status, .. } => {
                AppError::network(message).with_detail("status", status)
            }
            ClientError::Http(_) | ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                AppError::network(message)
            }
            ClientError::NotFound(resource) => AppError::not_found(resource),
            ClientError::Validation(msg) => AppError::validation(msg),
            ClientError::Config(msg) => AppError::with_message(ErrorCode::ConfigError, msg),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
