//! Push-event type definitions and parsing.

use serde::{Deserialize, Serialize};

/// A server-initiated notification delivered over the push channel.
///
/// Events are transient: parsed, dispatched once, never stored. Unknown
/// `type` discriminators collapse into [`PushEvent::Unknown`] so new
/// backend event kinds degrade to a logged no-op instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PushEvent {
    /// An order's status was changed.
    OrderStatusChanged {
        /// Order the change applies to.
        #[serde(rename = "orderId", default)]
        order_id: Option<i64>,
    },
    /// An incoming message was marked processed.
    MessageProcessed {
        /// Message that was processed.
        #[serde(rename = "messageId", default)]
        message_id: Option<i64>,
    },
    /// A support request was marked processed.
    SupportProcessed {
        /// Support request that was processed.
        #[serde(rename = "supportId", default)]
        support_id: Option<i64>,
    },
    /// An admin reply was stored on the backend.
    AdminMessageSent {
        /// Conversation the reply belongs to.
        #[serde(rename = "orderId", default)]
        order_id: Option<i64>,
    },
    /// Some backend dataset changed.
    DataUpdate,
    /// A backend-side full synchronization finished.
    FullSyncComplete,
    /// Any discriminator outside the known vocabulary.
    #[serde(other)]
    Unknown,
}

impl PushEvent {
    /// Short name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OrderStatusChanged { .. } => "order_status_changed",
            Self::MessageProcessed { .. } => "message_processed",
            Self::SupportProcessed { .. } => "support_processed",
            Self::AdminMessageSent { .. } => "admin_message_sent",
            Self::DataUpdate => "data_update",
            Self::FullSyncComplete => "full_sync_complete",
            Self::Unknown => "unknown",
        }
    }
}

/// Parse one raw payload into a push event.
pub fn parse_event(raw: &str) -> Result<PushEvent, serde_json::Error> {
    serde_json::from_str(raw)
}
