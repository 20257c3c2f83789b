//! Dashboard view-models
//!
//! Builds the summary tiles and chart datasets the admin dashboard
//! renders. Chart points keep the first-occurrence order of their keys
//! in the filtered snapshot so labels stay stable across recomputations.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Order;

use crate::analytics::{self, day_key, StatusCounts};

/// One label/value entry of a chart dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Summary tile values for the filtered snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_orders: usize,
    pub not_process_orders: usize,
    pub processing_orders: usize,
    pub completed_orders: usize,
    pub cancelled_orders: usize,
    /// Sum of recorded cart totals
    pub total_amount: f64,
}

/// Everything the dashboard view renders, in plain serializable form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub summary: DashboardSummary,
    /// Revenue per calendar day (`dd/mm/yyyy` labels)
    pub revenue_by_date: Vec<ChartPoint>,
    /// Units sold per product title
    pub units_by_product: Vec<ChartPoint>,
}

/// Build the full dashboard from an order snapshot and a date filter
///
/// Applies the calendar-day filter once, then derives every aggregate
/// from the filtered subset. Pure and synchronous; recomputed on each
/// filter change.
pub fn build_dashboard(orders: &[Order], filter: Option<NaiveDate>) -> Dashboard {
    let filtered = analytics::filter_by_date(orders, filter);

    let counts: StatusCounts = analytics::count_by_status(&filtered);
    let summary = DashboardSummary {
        total_orders: filtered.len(),
        not_process_orders: counts.not_process,
        processing_orders: counts.processing,
        completed_orders: counts.completed,
        cancelled_orders: counts.cancelled,
        total_amount: analytics::sum_total(&filtered),
    };

    Dashboard {
        summary,
        revenue_by_date: revenue_by_date_points(&filtered),
        units_by_product: units_by_product_points(&filtered),
    }
}

/// Revenue chart dataset, keyed by calendar day in first-occurrence order
fn revenue_by_date_points(orders: &[Order]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in orders {
        let Some(date) = order.created_date() else {
            continue;
        };
        let label = day_key(date);
        match index.get(&label) {
            Some(&i) => points[i].value += order.cart_total,
            None => {
                index.insert(label.clone(), points.len());
                points.push(ChartPoint {
                    label,
                    value: order.cart_total,
                });
            }
        }
    }
    points
}

/// Units-sold chart dataset, keyed by product title in first-occurrence order
fn units_by_product_points(orders: &[Order]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in orders {
        for item in &order.products {
            let title = &item.product.title;
            match index.get(title) {
                Some(&i) => points[i].value += item.count as f64,
                None => {
                    index.insert(title.clone(), points.len());
                    points.push(ChartPoint {
                        label: title.clone(),
                        value: item.count as f64,
                    });
                }
            }
        }
    }
    points
}
