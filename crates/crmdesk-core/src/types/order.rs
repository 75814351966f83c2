//! Order records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::status::OrderStatus;

/// An order as returned by `/api/frontend/data/requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Backend-assigned order id.
    pub id: i64,
    /// Client username, when known.
    #[serde(default)]
    pub username: Option<String>,
    /// Client first name, when known.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Client last name, when known.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Name of the ordered service.
    #[serde(default)]
    pub service_name: String,
    /// Free-form order message from the client.
    #[serde(default)]
    pub message: String,
    /// Current lifecycle status.
    #[serde(default)]
    pub status: OrderStatus,
    /// Raw timestamp in whatever shape the backend sent.
    #[serde(default)]
    pub timestamp: Value,
    /// Comment left by the admin on the last status change.
    #[serde(default)]
    pub admin_comment: Option<String>,
}

impl Order {
    /// Best available display name for the ordering client.
    pub fn client_name(&self) -> String {
        super::display_name(&self.username, &self.first_name)
    }
}
