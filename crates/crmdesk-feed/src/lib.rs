//! # crmdesk-feed
//!
//! Merging of heterogeneous CRM records into ordered feeds:
//!
//! - the dashboard activity feed (orders + messages, newest first)
//! - chat conversation threads (oldest first, the opposite direction,
//!   which is load-bearing)
//! - dashboard statistics reduction
//!
//! Everything here is stateless given its inputs; feeds are recomputed per
//! page load and per refresh event, never persisted.

pub mod activity;
pub mod chat;
pub mod stats;

pub use activity::{merge_recent, ActivityItem, ActivityKind, ActivityStatus};
pub use chat::{conversation_thread, merge_chat};
pub use stats::{summarize, DashboardStats, SnapshotPayload};
