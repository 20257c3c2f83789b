//! Client error types

use thiserror::Error;

/// Error type for admin API operations
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// API-level error carried in a success response envelope
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for admin API operations
pub type ApiClientResult<T> = Result<T, ApiClientError>;
