//! Support ticket records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A support request as returned by `/api/frontend/data/support_requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportRequest {
    /// Backend-assigned request id.
    pub id: i64,
    /// Requester username, when known.
    #[serde(default)]
    pub username: Option<String>,
    /// Requester first name, when known.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Full name entered on the support form.
    #[serde(default)]
    pub name: Option<String>,
    /// Ticket subject line.
    #[serde(default)]
    pub subject: String,
    /// Ticket body.
    #[serde(default)]
    pub message: String,
    /// Raw timestamp in whatever shape the backend sent.
    #[serde(default)]
    pub timestamp: Value,
    /// Whether an admin already handled this request.
    #[serde(default)]
    pub processed: bool,
}

impl SupportRequest {
    /// Best available display name: the form name wins over the account
    /// identity fields.
    pub fn requester_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| super::display_name(&self.username, &self.first_name))
    }
}
