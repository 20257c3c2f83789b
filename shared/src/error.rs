//! Unified error system for the admin console
//!
//! Provides [`ApiErrorCode`] (standardized error codes with HTTP status
//! mapping) and [`ApiError`] (the error type the API boundary converts
//! into response envelopes).

use http::StatusCode;
use thiserror::Error;

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Success
    Success,
    /// Validation error (400)
    Validation,
    /// Authentication required (401)
    Unauthorized,
    /// Resource not found (404)
    NotFound,
    /// Internal server error (500)
    Internal,
}

impl ApiErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::Unauthorized => "E3001",
            Self::NotFound => "E0003",
            Self::Internal => "E9001",
        }
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Unified error type for the admin console
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error
    #[error("{message}")]
    Validation { message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Internal server error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    // ========== Convenient constructors ==========

    /// Create a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // ========== Error inspection methods ==========

    /// Get the error code for this error
    pub fn error_code(&self) -> ApiErrorCode {
        match self {
            Self::Validation { .. } => ApiErrorCode::Validation,
            Self::Unauthorized => ApiErrorCode::Unauthorized,
            Self::NotFound { .. } => ApiErrorCode::NotFound,
            Self::Internal { .. } => ApiErrorCode::Internal,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        self.error_code().status_code()
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message } => message.clone(),
            Self::Unauthorized => "Please login first".to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Internal { message } => message.clone(),
        }
    }

    /// Convert to the unified response envelope
    pub fn to_response<T>(&self) -> crate::response::ApiResponse<T> {
        crate::response::ApiResponse::error(self.error_code().code(), self.message())
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
