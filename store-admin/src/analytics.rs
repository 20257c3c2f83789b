//! Order analytics aggregator
//!
//! Pure, synchronous transforms from a fetched order snapshot to the
//! dashboard aggregates: a calendar-day filtered subset, status-bucketed
//! counts, revenue totals, and per-date / per-product sales groupings.
//!
//! Every operation is a single linear scan over an owned snapshot and is
//! total over the documented input shapes: empty snapshots, orders with
//! no line items, and orders with absent or malformed timestamps all
//! contribute nothing instead of raising. Aggregates are recomputed on
//! every call; nothing is cached or mutated in place.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::{Order, OrderStatus};

/// Calendar-day key format used for grouping (en-GB, dd/mm/yyyy)
pub const DAY_KEY_FORMAT: &str = "%d/%m/%Y";

/// Format a calendar day as a grouping key
pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Order counts per status bucket
///
/// Only the four known statuses are counted. An order with an
/// unrecognized status lands in no bucket, so [`total`] can be less
/// than the length of the aggregated snapshot.
///
/// [`total`]: StatusCounts::total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub not_process: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    /// Count for one status bucket; `Unknown` always reads zero
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::NotProcess => self.not_process,
            OrderStatus::Processing => self.processing,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
            OrderStatus::Unknown => 0,
        }
    }

    /// Sum of the four buckets
    pub fn total(&self) -> usize {
        self.not_process + self.processing + self.completed + self.cancelled
    }
}

/// Per-product sales grouped by product title
///
/// The title is the product's identity key here: two line items sharing
/// a title merge even when they reference different product records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductSales {
    /// title -> sum of count x unit price
    pub revenue: HashMap<String, f64>,
    /// title -> sum of count
    pub quantity: HashMap<String, i64>,
}

/// Keep only orders created on the given local calendar day
///
/// `None` means no filtering: the snapshot is returned unchanged.
/// The filter is stable (surviving orders keep their relative order)
/// and an order without a resolvable creation date never matches.
pub fn filter_by_date(orders: &[Order], filter: Option<NaiveDate>) -> Vec<Order> {
    match filter {
        None => orders.to_vec(),
        Some(day) => orders
            .iter()
            .filter(|order| order.created_date() == Some(day))
            .cloned()
            .collect(),
    }
}

/// Count orders per known status bucket
pub fn count_by_status(orders: &[Order]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for order in orders {
        match order.order_status {
            OrderStatus::NotProcess => counts.not_process += 1,
            OrderStatus::Processing => counts.processing += 1,
            OrderStatus::Completed => counts.completed += 1,
            OrderStatus::Cancelled => counts.cancelled += 1,
            // Unrecognized statuses are dropped, not bucketed
            OrderStatus::Unknown => {}
        }
    }
    counts
}

/// Sum the recorded cart totals
///
/// Uses `cart_total` as supplied by the API; line items are never
/// re-summed here.
pub fn sum_total(orders: &[Order]) -> f64 {
    orders.iter().map(|order| order.cart_total).sum()
}

/// Group cart totals by local calendar day (`dd/mm/yyyy` keys)
///
/// Orders without a resolvable creation date are skipped.
pub fn sales_by_date(orders: &[Order]) -> HashMap<String, f64> {
    let mut sales = HashMap::new();
    for order in orders {
        if let Some(date) = order.created_date() {
            *sales.entry(day_key(date)).or_insert(0.0) += order.cart_total;
        }
    }
    sales
}

/// Group revenue and unit counts by product title
///
/// Walks every line item of every order; orders with an empty line-item
/// list contribute nothing.
pub fn sales_by_product(orders: &[Order]) -> ProductSales {
    let mut sales = ProductSales::default();
    for order in orders {
        for item in &order.products {
            let title = &item.product.title;
            *sales.revenue.entry(title.clone()).or_insert(0.0) +=
                item.count as f64 * item.product.price;
            *sales.quantity.entry(title.clone()).or_insert(0) += item.count;
        }
    }
    sales
}
