//! Admin console core for the storefront
//!
//! Provides the typed order API client ([`OrderApi`]), the order analytics
//! aggregator ([`analytics`]) and the dashboard view-model builders
//! ([`dashboard`]). Rendering stays with the frontend; everything produced
//! here is plain serializable data.

pub mod analytics;
pub mod client;
pub mod dashboard;
pub mod error;

// Re-exports
pub use client::OrderApi;
pub use dashboard::{build_dashboard, Dashboard, DashboardSummary};
pub use error::{ApiClientError, ApiClientResult};
