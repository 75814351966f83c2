//! Dashboard statistics reduction.

use serde::{Deserialize, Serialize};

use crmdesk_core::types::{IncomingMessage, Order, OrderStatus, RatingSummary};

/// Raw data snapshot the statistics are reduced from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SnapshotPayload {
    /// Order records ("requests" on the wire).
    #[serde(default)]
    pub requests: Vec<Order>,
    /// Incoming message records.
    #[serde(default)]
    pub messages: Vec<IncomingMessage>,
    /// Aggregate rating, when the backend has one.
    #[serde(default)]
    pub average_rating: Option<RatingSummary>,
}

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total number of orders.
    pub total_orders: u64,
    /// Orders still pending.
    pub pending_orders: u64,
    /// Messages no admin has handled yet.
    pub unread_messages: u64,
    /// Mean star rating.
    pub average_rating: f64,
}

impl DashboardStats {
    /// Rating rendered to one decimal place, as the dashboard shows it.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

/// Reduce a raw snapshot to dashboard numbers.
pub fn summarize(payload: &SnapshotPayload) -> DashboardStats {
    DashboardStats {
        total_orders: payload.requests.len() as u64,
        pending_orders: payload
            .requests
            .iter()
            .filter(|r| r.status == OrderStatus::Pending)
            .count() as u64,
        unread_messages: payload.messages.iter().filter(|m| !m.processed).count() as u64,
        average_rating: payload
            .average_rating
            .as_ref()
            .map(|r| r.average_rating)
            .unwrap_or(0.0),
    }
}

/// Placeholder numbers shown when the backend is unreachable.
pub fn cached_fallback() -> DashboardStats {
    DashboardStats {
        total_orders: 25,
        pending_orders: 8,
        unread_messages: 12,
        average_rating: 4.7,
    }
}
