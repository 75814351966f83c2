//! Push-event to refresh-action routing.

use async_trait::async_trait;
use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tracing::debug;

use crmdesk_realtime::{EventHandler, PushEvent};

use crate::page::Page;

/// A zero-argument refresh action supplied by the rendering layer.
pub type RefreshAction = Box<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Reload of a single conversation's messages, keyed by order id.
pub type ConversationReload = Box<dyn Fn(i64) -> BoxFuture<'static, ()> + Send + Sync>;

/// One refresh callback per page kind, plus the conversation-scoped
/// reload. Injected at construction; the coordinator never knows what the
/// callbacks actually do.
pub struct RefreshActions {
    /// Refresh the dashboard page.
    pub dashboard: RefreshAction,
    /// Refresh the orders page.
    pub orders: RefreshAction,
    /// Refresh the messages page.
    pub messages: RefreshAction,
    /// Refresh the chat page.
    pub chat: RefreshAction,
    /// Refresh the support page.
    pub support: RefreshAction,
    /// Refresh the reviews page.
    pub reviews: RefreshAction,
    /// Reload one conversation's messages without a full-page refresh.
    pub reload_conversation: ConversationReload,
}

/// Routes push events to the refresh action of the currently active page.
///
/// Holds no business data: only the active page identifier and the open
/// conversation id. Both are re-read at dispatch time; a handler resumed
/// after an await must not assume the page it saw earlier is still active.
/// Across overlapping refreshes the last resolved response wins; there is
/// no request sequencing.
pub struct SyncCoordinator {
    actions: RefreshActions,
    active_page: RwLock<Page>,
    open_conversation: RwLock<Option<i64>>,
}

impl SyncCoordinator {
    /// Build a coordinator starting on the dashboard with no open
    /// conversation.
    pub fn new(actions: RefreshActions) -> Self {
        Self {
            actions,
            active_page: RwLock::new(Page::Dashboard),
            open_conversation: RwLock::new(None),
        }
    }

    /// Record a page switch.
    pub async fn set_active_page(&self, page: Page) {
        *self.active_page.write().await = page;
    }

    /// The currently active page.
    pub async fn active_page(&self) -> Page {
        *self.active_page.read().await
    }

    /// Record which conversation is open, or `None` when the chat pane
    /// was closed.
    pub async fn set_open_conversation(&self, order_id: Option<i64>) {
        *self.open_conversation.write().await = order_id;
    }

    /// The currently open conversation, if any.
    pub async fn open_conversation(&self) -> Option<i64> {
        *self.open_conversation.read().await
    }

    /// Run the active page's refresh action.
    ///
    /// Safe to run redundantly: every injected action is required to be
    /// idempotent.
    pub async fn refresh_active_page(&self) {
        let page = self.active_page().await;
        debug!(page = %page, "refreshing active page");
        let action = match page {
            Page::Dashboard => &self.actions.dashboard,
            Page::Orders => &self.actions.orders,
            Page::Messages => &self.actions.messages,
            Page::Chat => &self.actions.chat,
            Page::Support => &self.actions.support,
            Page::Reviews => &self.actions.reviews,
        };
        action().await;
    }
}

#[async_trait]
impl EventHandler for SyncCoordinator {
    async fn on_event(&self, event: PushEvent) {
        match event {
            PushEvent::AdminMessageSent { order_id } => {
                // Re-read at dispatch time: the admin may have switched
                // conversations while this event was in flight.
                let open = self.open_conversation().await;
                match (order_id, open) {
                    (Some(id), Some(current)) if id == current => {
                        debug!(order_id = id, "reloading open conversation");
                        (self.actions.reload_conversation)(id).await;
                    }
                    _ => {
                        debug!(?order_id, "admin message for another conversation, ignored");
                    }
                }
            }
            PushEvent::OrderStatusChanged { .. }
            | PushEvent::MessageProcessed { .. }
            | PushEvent::SupportProcessed { .. }
            | PushEvent::DataUpdate
            | PushEvent::FullSyncComplete => {
                self.refresh_active_page().await;
            }
            PushEvent::Unknown => {
                debug!("unknown push event ignored");
            }
        }
    }
}
