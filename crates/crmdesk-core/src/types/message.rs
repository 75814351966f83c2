//! Incoming client message records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A client message as returned by `/api/frontend/data/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Backend-assigned message id.
    pub id: i64,
    /// Sender username, when known.
    #[serde(default)]
    pub username: Option<String>,
    /// Sender first name, when known.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Message body.
    #[serde(default)]
    pub message: String,
    /// Raw timestamp in whatever shape the backend sent.
    #[serde(default)]
    pub timestamp: Value,
    /// Whether an admin already handled this message.
    #[serde(default)]
    pub processed: bool,
}

impl IncomingMessage {
    /// Best available display name for the sender.
    pub fn sender_name(&self) -> String {
        super::display_name(&self.username, &self.first_name)
    }
}
