//! The dashboard activity feed: recent orders and messages in one list.

use serde::{Deserialize, Serialize};

use crmdesk_core::time::normalize;
use crmdesk_core::types::{IncomingMessage, Order, OrderStatus};

/// Feed length when the caller does not ask for more.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// How many characters of a message body make it into a feed row.
const PREVIEW_CHARS: usize = 50;

/// Which source a feed item was projected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Projected from an order record.
    Order,
    /// Projected from an incoming message record.
    Message,
}

/// Status badge of a feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    /// Order waiting to be taken into work.
    Pending,
    /// Order being worked on.
    Processing,
    /// Order finished.
    Completed,
    /// Order cancelled.
    Cancelled,
    /// Order with an active conversation.
    Active,
    /// Message not yet handled.
    New,
    /// Message already handled.
    Processed,
    /// Unrecognized source status.
    Unknown,
}

impl From<OrderStatus> for ActivityStatus {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self::Pending,
            OrderStatus::Processing => Self::Processing,
            OrderStatus::Completed => Self::Completed,
            OrderStatus::Cancelled => Self::Cancelled,
            OrderStatus::Active => Self::Active,
            OrderStatus::Unknown => Self::Unknown,
        }
    }
}

impl ActivityStatus {
    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Active => "Active",
            Self::New => "New",
            Self::Processed => "Processed",
            Self::Unknown => "Unknown",
        }
    }
}

/// One row of the activity feed. Never persisted; recomputed per page load
/// and per refresh event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Source the row was projected from.
    pub kind: ActivityKind,
    /// Row headline.
    pub title: String,
    /// Row detail line.
    pub description: String,
    /// Normalized instant used for ordering.
    pub timestamp_ms: i64,
    /// Status badge.
    pub status: ActivityStatus,
}

/// Merge recent orders and messages into one feed, newest first.
///
/// Projection keeps orders ahead of messages on equal timestamps (the sort
/// is stable over the orders-then-messages concatenation, each internally
/// in source order), then the feed is truncated to `limit` rows. Total:
/// empty inputs yield an empty feed.
pub fn merge_recent(
    orders: &[Order],
    messages: &[IncomingMessage],
    limit: usize,
) -> Vec<ActivityItem> {
    let mut items: Vec<ActivityItem> = orders
        .iter()
        .map(project_order)
        .chain(messages.iter().map(project_message))
        .collect();

    items.sort_by_key(|item| std::cmp::Reverse(item.timestamp_ms));
    items.truncate(limit);
    items
}

fn project_order(order: &Order) -> ActivityItem {
    ActivityItem {
        kind: ActivityKind::Order,
        title: format!("New order #{}", order.id),
        description: format!("{} for {}", order.service_name, order.client_name()),
        timestamp_ms: normalize(&order.timestamp),
        status: order.status.into(),
    }
}

fn project_message(message: &IncomingMessage) -> ActivityItem {
    ActivityItem {
        kind: ActivityKind::Message,
        title: "New message".to_string(),
        description: format!(
            "{}: {}",
            message.sender_name(),
            preview(&message.message, PREVIEW_CHARS)
        ),
        timestamp_ms: normalize(&message.timestamp),
        status: if message.processed {
            ActivityStatus::Processed
        } else {
            ActivityStatus::New
        },
    }
}

/// First `max` characters of `text`, with an ellipsis when trimmed.
/// Counts characters, not bytes, so multi-byte text never splits.
fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max).collect();
        out.push_str("...");
        out
    }
}
