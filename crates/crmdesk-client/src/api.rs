//! REST client for the CRM backend.
//!
//! Read paths never fail: any transport error, bad status, decode error,
//! or `success=false` envelope degrades to the built-in demo dataset with
//! a warning. Mutating paths are the opposite: they propagate the
//! server's error field verbatim, because those are the only operations
//! where the user must be told something went wrong.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crmdesk_core::config::backend::BackendConfig;
use crmdesk_core::error::AppError;
use crmdesk_core::result::AppResult;
use crmdesk_core::types::{
    ChatMessage, ChatOrder, IncomingMessage, Order, OrderStatus, RatingSummary, Review,
    SupportRequest,
};
use crmdesk_feed::stats::{self, DashboardStats};
use crmdesk_feed::chat::conversation_thread;

use crate::demo;
use crate::envelope::Envelope;

/// HTTP client for the CRM backend's frontend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from backend configuration.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // ── Read paths (demo fallback, never error) ──────────────────

    /// All orders.
    pub async fn orders(&self) -> Vec<Order> {
        self.fetch_or("/api/frontend/data/requests", demo::orders)
            .await
    }

    /// All incoming messages.
    pub async fn messages(&self) -> Vec<IncomingMessage> {
        self.fetch_or("/api/frontend/data/messages", demo::incoming_messages)
            .await
    }

    /// Orders with active conversations.
    pub async fn chat_orders(&self) -> Vec<ChatOrder> {
        self.fetch_or("/api/frontend/data/chat_orders", demo::chat_orders)
            .await
    }

    /// One conversation's messages, oldest first.
    pub async fn chat_messages(&self, order_id: i64) -> Vec<ChatMessage> {
        let records = self
            .fetch_or("/api/frontend/data/chat_messages", || {
                demo::chat_messages(order_id)
            })
            .await;
        conversation_thread(&records, order_id)
    }

    /// All support requests.
    pub async fn support_requests(&self) -> Vec<SupportRequest> {
        self.fetch_or("/api/frontend/data/support_requests", demo::support_requests)
            .await
    }

    /// All reviews.
    pub async fn reviews(&self) -> Vec<Review> {
        self.fetch_or("/api/frontend/data/reviews", demo::reviews)
            .await
    }

    /// Aggregate rating.
    pub async fn average_rating(&self) -> RatingSummary {
        self.fetch_or("/api/frontend/data/average_rating", demo::rating_summary)
            .await
    }

    /// Dashboard headline numbers.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        match self.fetch_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                warn!(error = %e, "stats fetch failed, using cached fallback");
                stats::cached_fallback()
            }
        }
    }

    // ── Mutating paths (server errors surface to the user) ───────

    /// Change an order's status, with an optional admin comment.
    pub async fn change_order_status(
        &self,
        order_id: i64,
        new_status: OrderStatus,
        comment: Option<&str>,
    ) -> AppResult<()> {
        self.post_command(
            "/api/frontend/order/status",
            &serde_json::json!({
                "orderId": order_id,
                "newStatus": new_status,
                "comment": comment,
            }),
        )
        .await
    }

    /// Mark an incoming message as processed.
    pub async fn mark_message_processed(&self, message_id: i64) -> AppResult<()> {
        self.post_command(
            "/api/frontend/message/process",
            &serde_json::json!({ "messageId": message_id }),
        )
        .await
    }

    /// Mark a support request as processed.
    pub async fn mark_support_processed(&self, support_id: i64) -> AppResult<()> {
        self.post_command(
            "/api/frontend/support/process",
            &serde_json::json!({ "supportId": support_id }),
        )
        .await
    }

    /// Send an admin reply into a conversation.
    ///
    /// Returns the optimistic [`ChatMessage`] carrying the server-assigned
    /// id and timestamp, ready to be merged into the open thread before
    /// the push echo arrives.
    pub async fn send_admin_message(&self, order_id: i64, text: &str) -> AppResult<ChatMessage> {
        let path = "/api/frontend/chat/admin-message";
        let response: AdminMessageResponse = self
            .post_json(
                path,
                &serde_json::json!({ "orderId": order_id, "message": text }),
            )
            .await?;

        if !response.success {
            return Err(AppError::external_service(
                response
                    .error
                    .unwrap_or_else(|| "backend rejected the message".to_string()),
            ));
        }
        let echo = response
            .admin_message
            .ok_or_else(|| AppError::external_service("response carried no message echo"))?;

        Ok(ChatMessage {
            id: echo.id,
            order_id,
            message: text.to_string(),
            is_admin: true,
            timestamp: echo.timestamp,
            username: None,
            first_name: None,
        })
    }

    // ── Plumbing ─────────────────────────────────────────────────

    async fn fetch_or<T, F>(&self, path: &str, fallback: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.fetch_data(path).await {
            Ok(data) => data,
            Err(e) => {
                warn!(path, error = %e, "fetch failed, serving demo data");
                fallback()
            }
        }
    }

    async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let envelope: Envelope<T> = self.get_json(path).await?;
        envelope.into_data().map_err(AppError::external_service)
    }

    async fn fetch_stats(&self) -> AppResult<DashboardStats> {
        let response: StatsResponse = self.get_json("/api/frontend/stats").await?;
        if !response.success {
            return Err(AppError::external_service("stats endpoint reported failure"));
        }
        let payload = response
            .stats
            .ok_or_else(|| AppError::external_service("stats response carried no payload"))?;

        Ok(DashboardStats {
            total_orders: payload.requests,
            // The stats endpoint does not break pending orders out.
            pending_orders: payload.requests,
            unread_messages: payload.messages,
            average_rating: float_field(&payload.average_rating),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("GET {path}: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("GET {path}: {e}")))?;

        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("GET {path}: bad response body: {e}")))
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &Value) -> AppResult<T> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("POST {path}: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::external_service(format!("POST {path}: {e}")))?;

        response
            .json()
            .await
            .map_err(|e| AppError::external_service(format!("POST {path}: bad response body: {e}")))
    }

    async fn post_command(&self, path: &str, body: &Value) -> AppResult<()> {
        let envelope: Envelope<Value> = self.post_json(path, body).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(AppError::external_service(
                envelope
                    .error
                    .unwrap_or_else(|| "backend rejected the operation".to_string()),
            ))
        }
    }
}

/// `/api/frontend/stats` response shape.
#[derive(Debug, Deserialize)]
struct StatsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    stats: Option<StatsPayload>,
}

/// Raw counters inside the stats response.
#[derive(Debug, Deserialize)]
struct StatsPayload {
    #[serde(default)]
    requests: u64,
    #[serde(default)]
    messages: u64,
    /// The backend sends this as a number or a numeric string.
    #[serde(default)]
    average_rating: Value,
}

/// `/api/frontend/chat/admin-message` response shape.
#[derive(Debug, Deserialize)]
struct AdminMessageResponse {
    #[serde(default)]
    success: bool,
    #[serde(rename = "adminMessage", default)]
    admin_message: Option<AdminMessageEcho>,
    #[serde(default)]
    error: Option<String>,
}

/// Server echo of a stored admin message.
#[derive(Debug, Deserialize)]
struct AdminMessageEcho {
    id: i64,
    #[serde(default)]
    timestamp: Value,
}

/// Read a float out of a JSON number or numeric string; 0.0 otherwise.
fn float_field(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
