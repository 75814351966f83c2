//! Order status vocabulary.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an order.
///
/// Statuses arrive as free-form strings from the backend; anything outside
/// the known vocabulary collapses into [`OrderStatus::Unknown`] rather than
/// failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting to be taken into work.
    Pending,
    /// Being worked on.
    Processing,
    /// Finished.
    Completed,
    /// Cancelled by either side.
    Cancelled,
    /// Has an active conversation.
    Active,
    /// Anything the backend sends outside the known vocabulary.
    #[serde(other)]
    Unknown,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl OrderStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Active => "active",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for badges and feed rows.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "In progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Active => "Active",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_roundtrip() {
        let status: OrderStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(status, OrderStatus::Processing);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"processing\"");
    }

    #[test]
    fn test_unrecognized_status_collapses() {
        let status: OrderStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
    }
}
