//! Build and print a dashboard from a fixture order snapshot
//!
//! Run with: `cargo run -p store-admin --example dashboard`

use chrono::{Local, NaiveDate, TimeZone};
use shared::models::{Customer, LineItem, Order, OrderStatus, ProductSnapshot};
use store_admin::build_dashboard;

fn local_ts(y: i32, m: u32, d: u32) -> String {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .unwrap()
        .to_rfc3339()
}

fn order(id: &str, status: OrderStatus, total: f64, ts: String, items: &[(&str, i64, f64)]) -> Order {
    Order {
        id: id.to_string(),
        ordered_by: Customer {
            email: "buyer@example.com".to_string(),
            address: "1 Main St".to_string(),
        },
        products: items
            .iter()
            .map(|(title, count, price)| LineItem {
                product: ProductSnapshot {
                    title: title.to_string(),
                    price: *price,
                },
                count: *count,
            })
            .collect(),
        cart_total: total,
        order_status: status,
        created_at: Some(ts),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let orders = vec![
        order(
            "ord-1",
            OrderStatus::Completed,
            100.0,
            local_ts(2024, 1, 1),
            &[("Mug", 2, 9.5), ("Shirt", 4, 20.25)],
        ),
        order(
            "ord-2",
            OrderStatus::Processing,
            50.0,
            local_ts(2024, 1, 2),
            &[("Mug", 1, 9.5)],
        ),
        order(
            "ord-3",
            OrderStatus::Cancelled,
            30.0,
            local_ts(2024, 1, 2),
            &[("Poster", 3, 10.0)],
        ),
    ];

    tracing::info!(count = orders.len(), "Aggregating fixture snapshot");
    let dashboard = build_dashboard(&orders, None);
    println!("{}", serde_json::to_string_pretty(&dashboard).unwrap());

    let filter = NaiveDate::from_ymd_opt(2024, 1, 2);
    tracing::info!(filter = %filter.unwrap(), "Re-aggregating with a date filter");
    let filtered = build_dashboard(&orders, filter);
    println!("{}", serde_json::to_string_pretty(&filtered).unwrap());
}
