//! Shared types for the storefront admin console
//!
//! Common types used across multiple crates including order models,
//! error types and response structures.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use response::ApiResponse;
