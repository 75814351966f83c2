//! # crmdesk-sync
//!
//! Routing of push events to page refresh actions. [`SyncCoordinator`]
//! owns nothing beyond "which page is active" and "which conversation is
//! open"; the actual refresh work is injected as callbacks by the
//! rendering layer, which keeps the core testable without any rendering
//! dependency.

pub mod coordinator;
pub mod page;

pub use coordinator::{RefreshActions, SyncCoordinator};
pub use page::Page;
