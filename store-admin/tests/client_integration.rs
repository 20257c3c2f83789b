// store-admin/tests/client_integration.rs
// Integration tests against an in-process HTTP server

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::{Local, NaiveDate, TimeZone};
use shared::error::ApiError;
use shared::models::{Customer, LineItem, Order, OrderStatus, OrderStatusUpdate, ProductSnapshot};
use shared::response::ApiResponse;
use store_admin::{build_dashboard, ApiClientError, OrderApi};

const TOKEN: &str = "admin-token";

fn local_ts(y: i32, m: u32, d: u32) -> String {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Local
        .from_local_datetime(&date.and_hms_opt(12, 0, 0).unwrap())
        .single()
        .unwrap()
        .to_rfc3339()
}

fn fixture_orders() -> Vec<Order> {
    let customer = Customer {
        email: "buyer@example.com".to_string(),
        address: "1 Main St".to_string(),
    };
    vec![
        Order {
            id: "ord-1".to_string(),
            ordered_by: customer.clone(),
            products: vec![LineItem {
                product: ProductSnapshot {
                    title: "A".to_string(),
                    price: 10.0,
                },
                count: 2,
            }],
            cart_total: 100.0,
            order_status: OrderStatus::Completed,
            created_at: Some(local_ts(2024, 1, 1)),
        },
        Order {
            id: "ord-2".to_string(),
            ordered_by: customer.clone(),
            products: vec![LineItem {
                product: ProductSnapshot {
                    title: "A".to_string(),
                    price: 10.0,
                },
                count: 1,
            }],
            cart_total: 50.0,
            order_status: OrderStatus::Cancelled,
            created_at: Some(local_ts(2024, 1, 2)),
        },
        // Status outside the four known buckets; must survive the trip
        Order {
            id: "ord-3".to_string(),
            ordered_by: customer,
            products: vec![],
            cart_total: 5.0,
            order_status: OrderStatus::Unknown,
            created_at: None,
        },
    ]
}

async fn list_orders_handler(headers: HeaderMap) -> (StatusCode, Json<ApiResponse<Vec<Order>>>) {
    let authorized = headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer admin-token");

    if !authorized {
        let err = ApiError::Unauthorized;
        return (err.status_code(), Json(err.to_response()));
    }
    (StatusCode::OK, Json(ApiResponse::ok(fixture_orders())))
}

type UpdateLog = Arc<Mutex<Vec<OrderStatusUpdate>>>;

async fn change_status_handler(
    State(log): State<UpdateLog>,
    Json(payload): Json<OrderStatusUpdate>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    if payload.order_id.is_empty() {
        let err = ApiError::validation("Missing order id");
        return (err.status_code(), Json(err.to_response()));
    }
    if !fixture_orders().iter().any(|o| o.id == payload.order_id) {
        let err = ApiError::not_found("Order");
        return (err.status_code(), Json(err.to_response()));
    }
    log.lock().unwrap().push(payload);
    (StatusCode::OK, Json(ApiResponse::ok(())))
}

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn test_router(log: UpdateLog) -> Router {
    Router::new()
        .route("/api/admin/orders", get(list_orders_handler))
        .route("/api/admin/order-status", put(change_status_handler))
        .with_state(log)
}

#[tokio::test]
async fn test_list_orders_and_build_dashboard() {
    let url = spawn_server(test_router(UpdateLog::default())).await;
    let api = OrderApi::new(url).with_token(TOKEN);

    let orders = api.list_orders().await.unwrap();
    assert_eq!(orders.len(), 3);
    assert_eq!(orders[2].order_status, OrderStatus::Unknown);

    let dashboard = build_dashboard(&orders, None);
    assert_eq!(dashboard.summary.total_orders, 3);
    assert_eq!(dashboard.summary.completed_orders, 1);
    assert_eq!(dashboard.summary.cancelled_orders, 1);
    // The unknown-status order counts toward the total tile only
    assert_eq!(
        dashboard.summary.completed_orders
            + dashboard.summary.cancelled_orders
            + dashboard.summary.processing_orders
            + dashboard.summary.not_process_orders,
        2
    );
    assert_eq!(dashboard.summary.total_amount, 155.0);
}

#[tokio::test]
async fn test_list_orders_filtered_by_day() {
    let url = spawn_server(test_router(UpdateLog::default())).await;
    let api = OrderApi::new(url).with_token(TOKEN);

    let orders = api.list_orders().await.unwrap();
    let filter = NaiveDate::from_ymd_opt(2024, 1, 1);
    let dashboard = build_dashboard(&orders, filter);

    assert_eq!(dashboard.summary.total_orders, 1);
    assert_eq!(dashboard.summary.total_amount, 100.0);
    assert_eq!(dashboard.revenue_by_date.len(), 1);
    assert_eq!(dashboard.revenue_by_date[0].label, "01/01/2024");
}

#[tokio::test]
async fn test_list_orders_without_token_is_unauthorized() {
    let url = spawn_server(test_router(UpdateLog::default())).await;
    let api = OrderApi::new(url);

    let err = api.list_orders().await.unwrap_err();
    assert!(matches!(err, ApiClientError::Unauthorized));
}

#[tokio::test]
async fn test_change_order_status() {
    let log = UpdateLog::default();
    let url = spawn_server(test_router(log.clone())).await;
    let api = OrderApi::new(url).with_token(TOKEN);

    api.change_order_status("ord-1", OrderStatus::Completed)
        .await
        .unwrap();

    let updates = log.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].order_id, "ord-1");
    assert_eq!(updates[0].order_status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_change_status_of_unknown_order_is_not_found() {
    let log = UpdateLog::default();
    let url = spawn_server(test_router(log.clone())).await;
    let api = OrderApi::new(url).with_token(TOKEN);

    let err = api
        .change_order_status("ord-missing", OrderStatus::Completed)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::NotFound(_)));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_change_status_with_empty_order_id_is_rejected() {
    let log = UpdateLog::default();
    let url = spawn_server(test_router(log.clone())).await;
    let api = OrderApi::new(url).with_token(TOKEN);

    let err = api
        .change_order_status("", OrderStatus::Processing)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiClientError::Validation(_)));
    assert!(log.lock().unwrap().is_empty());
}
