//! Data models
//!
//! Shared between the admin console and the storefront API (via JSON).
//! Field names on the wire are camelCase to match the remote API.

pub mod order;

// Re-exports
pub use order::*;
