//! The long-lived push channel with fixed-delay recovery.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tokio::sync::watch;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::event::{self, PushEvent};
use crate::handler::EventHandler;
use crate::transport::EventTransport;

/// Fixed delay between reconnect attempts. No growth, no ceiling: the
/// channel must eventually recover from transient network loss.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(5_000);

/// Connection state of the push channel.
///
/// There is no terminal state; the channel runs for the lifetime of the
/// session and always attempts to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No subscription open.
    Disconnected,
    /// Subscription opening, no event received yet.
    Connecting,
    /// At least one event received on the current subscription.
    Connected,
}

/// Manages a single inbound event subscription.
///
/// The channel opens the transport, promotes itself to `Connected` on the
/// first received event, and fans every parsed event out to its handlers.
/// Any transport failure drops it back to `Disconnected`, and it retries
/// after [`RECONNECT_DELAY`], indefinitely, unless the cancellation token
/// fires. Keeping the retry-forever policy behind a cancellable task means
/// teardown cannot leave a reconnect loop running after session end.
pub struct RealtimeChannel {
    transport: Arc<dyn EventTransport>,
    handlers: Vec<Arc<dyn EventHandler>>,
    state_tx: watch::Sender<ChannelState>,
}

impl RealtimeChannel {
    /// Build a channel over the given transport.
    pub fn new(transport: Arc<dyn EventTransport>) -> Self {
        let (state_tx, _) = watch::channel(ChannelState::Disconnected);
        Self {
            transport,
            handlers: Vec::new(),
            state_tx,
        }
    }

    /// Register a handler. All registration happens before [`run`].
    ///
    /// [`run`]: RealtimeChannel::run
    pub fn register(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Observe the channel state.
    pub fn state(&self) -> watch::Receiver<ChannelState> {
        self.state_tx.subscribe()
    }

    /// Drive the subscription until the token is cancelled.
    pub async fn run(&self, cancel: CancellationToken) {
        loop {
            self.set_state(ChannelState::Connecting);

            match self.transport.open().await {
                Ok(mut stream) => loop {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            self.set_state(ChannelState::Disconnected);
                            return;
                        }
                        next = stream.next() => match next {
                            Some(Ok(raw)) => {
                                self.set_state(ChannelState::Connected);
                                self.dispatch(&raw).await;
                            }
                            Some(Err(e)) => {
                                warn!(error = %e, "push stream failed");
                                break;
                            }
                            None => {
                                debug!("push stream ended");
                                break;
                            }
                        }
                    }
                },
                Err(e) => {
                    warn!(error = %e, "failed to open push stream");
                }
            }

            self.set_state(ChannelState::Disconnected);

            tokio::select! {
                _ = cancel.cancelled() => return,
                _ = time::sleep(RECONNECT_DELAY) => {}
            }
        }
    }

    fn set_state(&self, next: ChannelState) {
        let prev = self.state_tx.send_replace(next);
        if prev != next {
            debug!(?prev, ?next, "push channel state changed");
        }
    }

    async fn dispatch(&self, raw: &str) {
        match event::parse_event(raw) {
            Ok(PushEvent::Unknown) => {
                debug!(payload = raw, "dropping push event of unknown type");
            }
            Ok(event) => {
                debug!(kind = event.kind(), "dispatching push event");
                for handler in &self.handlers {
                    handler.on_event(event.clone()).await;
                }
            }
            Err(e) => {
                warn!(error = %e, "dropping malformed push event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures::stream;

    use crate::transport::{EventStream, TransportError};

    /// One scripted subscription: frames yielded in order, optionally
    /// followed by a stream that hangs instead of ending.
    struct Subscription {
        frames: Vec<Result<String, TransportError>>,
        hang_after: bool,
    }

    impl Subscription {
        fn finite(frames: Vec<Result<String, TransportError>>) -> Self {
            Self {
                frames,
                hang_after: false,
            }
        }

        fn hanging(frames: Vec<Result<String, TransportError>>) -> Self {
            Self {
                frames,
                hang_after: true,
            }
        }
    }

    /// Transport that replays scripted subscriptions and counts opens.
    /// Once the script runs out it behaves like a dead endpoint.
    struct ScriptedTransport {
        scripts: Mutex<Vec<Subscription>>,
        opens: AtomicUsize,
    }

    impl ScriptedTransport {
        fn new(scripts: Vec<Subscription>) -> Self {
            Self {
                scripts: Mutex::new(scripts),
                opens: AtomicUsize::new(0),
            }
        }

        fn open_count(&self) -> usize {
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
            let subscription = scripts.remove(0);
            let head = stream::iter(subscription.frames);
            if subscription.hang_after {
                Ok(head.chain(stream::pending()).boxed())
            } else {
                Ok(head.boxed())
            }
        }
    }

    /// Handler that records every event kind it sees.
    #[derive(Default)]
    struct Recorder {
        kinds: Mutex<Vec<&'static str>>,
    }

    impl Recorder {
        fn seen(&self) -> usize {
            self.kinds.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl EventHandler for Recorder {
        async fn on_event(&self, event: PushEvent) {
            self.kinds.lock().unwrap().push(event.kind());
        }
    }

    fn frame(raw: &str) -> Result<String, TransportError> {
        Ok(raw.to_string())
    }

    fn spawn_channel(
        channel: Arc<RealtimeChannel>,
        cancel: &CancellationToken,
    ) -> tokio::task::JoinHandle<()> {
        let cancel = cancel.clone();
        tokio::spawn(async move { channel.run(cancel).await })
    }

    // Polling with a short sleep (rather than yield_now) lets the paused
    // clock auto-advance through the channel's reconnect sleeps.
    async fn settle() {
        time::sleep(Duration::from_millis(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_connects_and_dispatches() {
        let transport = Arc::new(ScriptedTransport::new(vec![Subscription::finite(vec![
            frame(r#"{"type":"data_update"}"#),
            frame(r#"{"type":"order_status_changed","orderId":1}"#),
        ])]));
        let recorder = Arc::new(Recorder::default());

        let mut channel = RealtimeChannel::new(transport.clone());
        channel.register(recorder.clone());
        let cancel = CancellationToken::new();
        let runner = spawn_channel(Arc::new(channel), &cancel);

        while recorder.seen() < 2 {
            settle().await;
        }
        cancel.cancel();
        runner.await.unwrap();

        assert_eq!(
            *recorder.kinds.lock().unwrap(),
            vec!["data_update", "order_status_changed"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_state_connected_then_disconnected_on_teardown() {
        // The stream hangs after its first frame, so the channel parks in
        // Connected until cancelled.
        let transport = Arc::new(ScriptedTransport::new(vec![Subscription::hanging(vec![
            frame(r#"{"type":"data_update"}"#),
        ])]));

        let channel = Arc::new(RealtimeChannel::new(transport.clone()));
        let mut state = channel.state();
        let cancel = CancellationToken::new();
        let runner = spawn_channel(channel.clone(), &cancel);

        state
            .wait_for(|s| *s == ChannelState::Connected)
            .await
            .unwrap();

        cancel.cancel();
        runner.await.unwrap();
        assert_eq!(*channel.state().borrow(), ChannelState::Disconnected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reconnects_after_fixed_delay_indefinitely() {
        // The only scripted subscription dies after one event; every later
        // open fails outright. The channel must keep retrying with the
        // fixed delay and no ceiling.
        let transport = Arc::new(ScriptedTransport::new(vec![Subscription::finite(vec![
            frame(r#"{"type":"data_update"}"#),
            Err(TransportError::Stream("connection reset".into())),
        ])]));
        let recorder = Arc::new(Recorder::default());

        let mut channel = RealtimeChannel::new(transport.clone());
        channel.register(recorder.clone());
        let cancel = CancellationToken::new();
        let started = time::Instant::now();
        let runner = spawn_channel(Arc::new(channel), &cancel);

        while transport.open_count() < 5 {
            settle().await;
        }
        let elapsed = started.elapsed();
        cancel.cancel();
        runner.await.unwrap();

        // Four reconnects after the initial open, each 5 s apart.
        assert!(elapsed >= RECONNECT_DELAY * 4);
        assert_eq!(*recorder.kinds.lock().unwrap(), vec!["data_update"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_and_unknown_events_are_dropped() {
        let transport = Arc::new(ScriptedTransport::new(vec![Subscription::finite(vec![
            frame("not json at all"),
            frame(r#"{"type":"user_banned"}"#),
            frame(r#"{"type":"full_sync_complete"}"#),
        ])]));
        let recorder = Arc::new(Recorder::default());

        let mut channel = RealtimeChannel::new(transport.clone());
        channel.register(recorder.clone());
        let cancel = CancellationToken::new();
        let runner = spawn_channel(Arc::new(channel), &cancel);

        // Only the recognized event reaches handlers.
        while recorder.seen() < 1 {
            settle().await;
        }
        cancel.cancel();
        runner.await.unwrap();

        assert_eq!(*recorder.kinds.lock().unwrap(), vec!["full_sync_complete"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_stops_the_loop() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let channel = Arc::new(RealtimeChannel::new(transport.clone()));
        let cancel = CancellationToken::new();
        let runner = spawn_channel(channel.clone(), &cancel);

        while transport.open_count() < 2 {
            settle().await;
        }
        cancel.cancel();
        runner.await.unwrap();

        let opens_at_cancel = transport.open_count();
        time::sleep(RECONNECT_DELAY * 3).await;
        assert_eq!(transport.open_count(), opens_at_cancel);
    }
}
