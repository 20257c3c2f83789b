//! Typed HTTP client for the storefront admin API
//!
//! Thin reqwest wrapper over the remote order-management endpoints.
//! All endpoints use the unified `ApiResponse` envelope and bearer-token
//! authentication; network and auth failures surface here, never inside
//! the analytics layer.

use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::models::{Order, OrderStatus, OrderStatusUpdate};
use shared::response::ApiResponse;

use crate::error::{ApiClientError, ApiClientResult};

/// Admin order API client
#[derive(Debug, Clone)]
pub struct OrderApi {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl OrderApi {
    /// Create a client for the given base URL (no trailing slash needed)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            token: None,
        }
    }

    /// Attach a bearer token (builder style)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the bearer token (after re-login)
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// List all orders for the admin dashboard
    ///
    /// Returns an owned snapshot; a later fetch never aliases data a
    /// caller is still aggregating over.
    pub async fn list_orders(&self) -> ApiClientResult<Vec<Order>> {
        let resp: ApiResponse<Vec<Order>> = self
            .request(Method::GET, "/api/admin/orders", None::<&()>)
            .await?;

        if !resp.is_success() {
            return Err(ApiClientError::Api {
                code: resp.code,
                message: resp.message,
            });
        }

        let orders = resp
            .data
            .ok_or_else(|| ApiClientError::InvalidResponse("Missing order list".into()))?;
        tracing::debug!(count = orders.len(), "Fetched admin order snapshot");
        Ok(orders)
    }

    /// Change an order's status
    ///
    /// Status transitions happen server-side; callers are expected to
    /// re-fetch and re-aggregate after a successful update.
    pub async fn change_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> ApiClientResult<()> {
        let payload = OrderStatusUpdate {
            order_id: order_id.to_string(),
            order_status: status,
        };
        let resp: ApiResponse<()> = self
            .request(Method::PUT, "/api/admin/order-status", Some(&payload))
            .await?;

        if !resp.is_success() {
            return Err(ApiClientError::Api {
                code: resp.code,
                message: resp.message,
            });
        }

        tracing::info!(order_id = %order_id, status = %status, "Order status updated");
        Ok(())
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ApiClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, &url);

        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(ApiClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ApiClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ApiClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ApiClientError::Validation(text)),
                _ => Err(ApiClientError::Internal(text)),
            };
        }

        resp.json()
            .await
            .map_err(|e| ApiClientError::InvalidResponse(e.to_string()))
    }
}
