//! Order Model

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Wire values are the display strings used by the storefront API.
/// Values outside the four known statuses deserialize as [`Unknown`]
/// instead of failing the whole order list.
///
/// [`Unknown`]: OrderStatus::Unknown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    NotProcess,
    Processing,
    Completed,
    Cancelled,
    /// Unrecognized wire value (tolerated, never counted)
    Unknown,
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Not Process" => OrderStatus::NotProcess,
            "Processing" => OrderStatus::Processing,
            "Completed" => OrderStatus::Completed,
            "Cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl OrderStatus {
    /// The four known statuses, in lifecycle order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::NotProcess,
        OrderStatus::Processing,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Display string (matches the wire value for known statuses)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::NotProcess => "Not Process",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purchaser snapshot, immutable for the order's lifetime
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub email: String,
    pub address: String,
}

/// Product snapshot embedded in a line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    pub title: String,
    /// Unit price in currency unit
    pub price: f64,
}

/// One product-and-quantity entry within an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub product: ProductSnapshot,
    pub count: i64,
}

/// Order entity (read-only snapshot from the admin API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub ordered_by: Customer,
    /// Line items; an absent list deserializes as empty
    #[serde(default)]
    pub products: Vec<LineItem>,
    /// Recorded total in currency unit (never recomputed client-side)
    pub cart_total: f64,
    #[serde(default)]
    pub order_status: OrderStatus,
    /// Creation timestamp (RFC 3339); absent or malformed is tolerated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Order {
    /// Local calendar day the order was created on
    ///
    /// Returns `None` when `created_at` is absent or not parseable,
    /// so such orders simply never match a date filter.
    pub fn created_date(&self) -> Option<NaiveDate> {
        let raw = self.created_at.as_deref()?;
        let ts = DateTime::parse_from_rfc3339(raw).ok()?;
        Some(ts.with_timezone(&Local).date_naive())
    }
}

/// Update status payload (admin write path)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdate {
    pub order_id: String,
    pub order_status: OrderStatus,
}
