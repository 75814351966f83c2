//! Handler seam between the channel and the rest of the application.

use async_trait::async_trait;

use crate::event::PushEvent;

/// Receives every successfully parsed push event.
///
/// Handlers must tolerate redundant delivery: the backend may emit several
/// events for one underlying change, and every dispatched action is
/// expected to be idempotent.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// React to one push event.
    async fn on_event(&self, event: PushEvent);
}
