//! Shared fixtures for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crmdesk_auth::Clock;
use crmdesk_realtime::{EventStream, EventTransport, TransportError};
use crmdesk_sync::coordinator::RefreshActions;

/// Clock driven by hand, sharable across the test and the guard.
#[derive(Clone, Default)]
pub struct ManualClock(Arc<Mutex<i64>>);

impl ManualClock {
    pub fn at(ms: i64) -> Self {
        Self(Arc::new(Mutex::new(ms)))
    }

    pub fn advance(&self, ms: i64) {
        *self.0.lock().unwrap() += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        *self.0.lock().unwrap()
    }
}

/// Transport replaying scripted subscriptions; dead endpoint once the
/// script runs out.
pub struct ScriptedTransport {
    scripts: Mutex<Vec<Vec<Result<String, TransportError>>>>,
    opens: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(scripts: Vec<Vec<Result<String, TransportError>>>) -> Self {
        Self {
            scripts: Mutex::new(scripts),
            opens: AtomicUsize::new(0),
        }
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventTransport for ScriptedTransport {
    async fn open(&self) -> Result<EventStream, TransportError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let mut scripts = self.scripts.lock().unwrap();
        if scripts.is_empty() {
            return Err(TransportError::Connect("scripted end".into()));
        }
        Ok(stream::iter(scripts.remove(0)).boxed())
    }
}

/// Per-page refresh counters behind a coordinator.
#[derive(Default)]
pub struct RefreshLog {
    pub dashboard: AtomicUsize,
    pub orders: AtomicUsize,
    pub messages: AtomicUsize,
    pub chat: AtomicUsize,
    pub support: AtomicUsize,
    pub reviews: AtomicUsize,
    pub conversation_reloads: Mutex<Vec<i64>>,
}

impl RefreshLog {
    pub fn total_refreshes(&self) -> usize {
        self.dashboard.load(Ordering::SeqCst)
            + self.orders.load(Ordering::SeqCst)
            + self.messages.load(Ordering::SeqCst)
            + self.chat.load(Ordering::SeqCst)
            + self.support.load(Ordering::SeqCst)
            + self.reviews.load(Ordering::SeqCst)
    }
}

/// Refresh actions that only count invocations.
pub fn counting_actions(log: &Arc<RefreshLog>) -> RefreshActions {
    fn bump(
        log: &Arc<RefreshLog>,
        pick: fn(&RefreshLog) -> &AtomicUsize,
    ) -> crmdesk_sync::coordinator::RefreshAction {
        let log = log.clone();
        Box::new(move || {
            let log = log.clone();
            Box::pin(async move {
                pick(&log).fetch_add(1, Ordering::SeqCst);
            })
        })
    }

    let reload_log = log.clone();
    RefreshActions {
        dashboard: bump(log, |l| &l.dashboard),
        orders: bump(log, |l| &l.orders),
        messages: bump(log, |l| &l.messages),
        chat: bump(log, |l| &l.chat),
        support: bump(log, |l| &l.support),
        reviews: bump(log, |l| &l.reviews),
        reload_conversation: Box::new(move |order_id| {
            let log = reload_log.clone();
            Box::pin(async move {
                log.conversation_reloads.lock().unwrap().push(order_id);
            })
        }),
    }
}
