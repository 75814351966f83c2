//! Push events driving page refreshes end to end: scripted transport →
//! channel → coordinator → counted refresh actions.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tokio_util::sync::CancellationToken;

use crmdesk_realtime::{RealtimeChannel, TransportError, RECONNECT_DELAY};
use crmdesk_sync::{Page, SyncCoordinator};

use crate::helpers::{counting_actions, RefreshLog, ScriptedTransport};

fn frame(raw: &str) -> Result<String, TransportError> {
    Ok(raw.to_string())
}

async fn settle() {
    time::sleep(Duration::from_millis(10)).await;
}

#[tokio::test(start_paused = true)]
async fn test_events_refresh_the_active_page() {
    let transport = Arc::new(ScriptedTransport::new(vec![vec![
        frame(r#"{"type":"order_status_changed","orderId":3}"#),
        frame(r#"{"type":"data_update"}"#),
    ]]));
    let log = Arc::new(RefreshLog::default());
    let coordinator = Arc::new(SyncCoordinator::new(counting_actions(&log)));
    coordinator.set_active_page(Page::Orders).await;

    let mut channel = RealtimeChannel::new(transport);
    channel.register(coordinator.clone());
    let channel = Arc::new(channel);

    let cancel = CancellationToken::new();
    let runner = {
        let channel = channel.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { channel.run(cancel).await })
    };

    while log.orders.load(Ordering::SeqCst) < 2 {
        settle().await;
    }
    cancel.cancel();
    runner.await.unwrap();

    assert_eq!(log.orders.load(Ordering::SeqCst), 2);
    assert_eq!(log.total_refreshes(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_admin_message_event_reloads_only_the_open_conversation() {
    let transport = Arc::new(ScriptedTransport::new(vec![vec![
        frame(r#"{"type":"admin_message_sent","orderId":8}"#),
        frame(r#"{"type":"admin_message_sent","orderId":7}"#),
    ]]));
    let log = Arc::new(RefreshLog::default());
    let coordinator = Arc::new(SyncCoordinator::new(counting_actions(&log)));
    coordinator.set_active_page(Page::Chat).await;
    coordinator.set_open_conversation(Some(7)).await;

    let mut channel = RealtimeChannel::new(transport);
    channel.register(coordinator.clone());
    let channel = Arc::new(channel);

    let cancel = CancellationToken::new();
    let runner = {
        let channel = channel.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { channel.run(cancel).await })
    };

    while log.conversation_reloads.lock().unwrap().len() < 1 {
        settle().await;
    }
    cancel.cancel();
    runner.await.unwrap();

    // Only the matching conversation reloaded; no full-page refresh ran.
    assert_eq!(*log.conversation_reloads.lock().unwrap(), vec![7]);
    assert_eq!(log.total_refreshes(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_channel_outlives_repeated_transport_failures() {
    // First subscription delivers one event then dies; every reopen
    // fails. The channel must keep coming back on the fixed delay.
    let transport = Arc::new(ScriptedTransport::new(vec![vec![
        frame(r#"{"type":"full_sync_complete"}"#),
        Err(TransportError::Stream("gone".into())),
    ]]));
    let log = Arc::new(RefreshLog::default());
    let coordinator = Arc::new(SyncCoordinator::new(counting_actions(&log)));

    let mut channel = RealtimeChannel::new(transport.clone());
    channel.register(coordinator.clone());
    let channel = Arc::new(channel);

    let cancel = CancellationToken::new();
    let started = time::Instant::now();
    let runner = {
        let channel = channel.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { channel.run(cancel).await })
    };

    while transport.open_count() < 4 {
        settle().await;
    }
    assert!(started.elapsed() >= RECONNECT_DELAY * 3);
    cancel.cancel();
    runner.await.unwrap();

    assert_eq!(log.dashboard.load(Ordering::SeqCst), 1);
}
