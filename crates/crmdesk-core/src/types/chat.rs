//! Chat conversation records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::status::OrderStatus;

/// Label shown for admin-authored chat messages.
pub const ADMIN_LABEL: &str = "Administrator";

/// An order with an active conversation, as returned by
/// `/api/frontend/data/chat_orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatOrder {
    /// Backend-assigned order id.
    pub id: i64,
    /// Client username, when known.
    #[serde(default)]
    pub username: Option<String>,
    /// Client first name, when known.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Name of the ordered service.
    #[serde(default)]
    pub service_name: String,
    /// Current lifecycle status.
    #[serde(default)]
    pub status: OrderStatus,
    /// Preview of the most recent message in the conversation.
    #[serde(default)]
    pub last_message: Option<String>,
    /// Raw timestamp in whatever shape the backend sent.
    #[serde(default)]
    pub timestamp: Value,
}

/// One message inside an order conversation, as returned by
/// `/api/frontend/data/chat_messages`.
///
/// The `timestamp` stays raw on purpose: a freshly sent admin reply carries
/// a local epoch-millisecond send time while the server echo carries an ISO
/// string, and both must normalize to the same comparable instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Backend-assigned message id.
    pub id: i64,
    /// Conversation (order) this message belongs to.
    #[serde(default)]
    pub order_id: i64,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Whether the admin authored this message.
    #[serde(default)]
    pub is_admin: bool,
    /// Raw timestamp in whatever shape the backend sent.
    #[serde(default)]
    pub timestamp: Value,
    /// Author username, when known.
    #[serde(default)]
    pub username: Option<String>,
    /// Author first name, when known.
    #[serde(default)]
    pub first_name: Option<String>,
}

impl ChatMessage {
    /// Author label for rendering: admins get a fixed label, clients their
    /// best available identity.
    pub fn author_label(&self) -> String {
        if self.is_admin {
            ADMIN_LABEL.to_string()
        } else {
            super::display_name(&self.username, &self.first_name)
        }
    }
}
