//! Domain record types deserialized from backend JSON.
//!
//! Records keep their `timestamp` field as a raw [`serde_json::Value`]
//! because the backend mixes epoch numbers and date-time strings; the
//! [`crate::time`] module normalizes them at the point of comparison.

pub mod chat;
pub mod message;
pub mod order;
pub mod review;
pub mod status;
pub mod support;

pub use chat::{ChatMessage, ChatOrder};
pub use message::IncomingMessage;
pub use order::Order;
pub use review::{RatingSummary, Review};
pub use status::OrderStatus;
pub use support::SupportRequest;

/// Fallback display name used when a record carries no usable identity.
pub const UNKNOWN_USER: &str = "unknown";

/// Picks the best display name out of the optional identity fields the
/// backend sends (`username` first, then `first_name`).
pub(crate) fn display_name(username: &Option<String>, first_name: &Option<String>) -> String {
    username
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(first_name.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or(UNKNOWN_USER)
        .to_string()
}
