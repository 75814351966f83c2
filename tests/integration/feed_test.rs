//! Demo data flowing through the merge and formatting pipeline.

use crmdesk_client::demo;
use crmdesk_core::time::{format_relative, normalize};
use crmdesk_feed::activity::{ActivityKind, DEFAULT_ACTIVITY_LIMIT};
use crmdesk_feed::{merge_chat, merge_recent, summarize, SnapshotPayload};

#[test]
fn test_demo_activity_feed_is_descending() {
    let feed = merge_recent(
        &demo::orders(),
        &demo::incoming_messages(),
        DEFAULT_ACTIVITY_LIMIT,
    );
    assert_eq!(feed.len(), 4);
    for pair in feed.windows(2) {
        assert!(pair[0].timestamp_ms >= pair[1].timestamp_ms);
    }
    // The 11:00 message outranks the 10:30 order.
    assert_eq!(feed[0].kind, ActivityKind::Message);
}

#[test]
fn test_optimistic_reply_lands_last_in_thread() {
    let history = demo::chat_messages(1);
    let last_instant = history
        .iter()
        .map(|m| normalize(&m.timestamp))
        .max()
        .unwrap();

    // The reply carries a local epoch-millisecond send time, unlike the
    // ISO strings in history.
    let mut reply = history[1].clone();
    reply.id = 99;
    reply.timestamp = serde_json::json!(last_instant + 60_000);

    let merged = merge_chat(history, reply);
    assert_eq!(merged.last().unwrap().id, 99);
    for pair in merged.windows(2) {
        assert!(normalize(&pair[0].timestamp) <= normalize(&pair[1].timestamp));
    }
}

#[test]
fn test_feed_rows_render_a_time_label() {
    let feed = merge_recent(&demo::orders(), &[], DEFAULT_ACTIVITY_LIMIT);
    let now = normalize(&serde_json::json!("2024-12-19 10:31:00"));
    // One minute after the newest demo order.
    assert_eq!(format_relative(feed[0].timestamp_ms, now), "1 min ago");
}

#[test]
fn test_snapshot_of_demo_data_summarizes() {
    let stats = summarize(&SnapshotPayload {
        requests: demo::orders(),
        messages: demo::incoming_messages(),
        average_rating: Some(demo::rating_summary()),
    });
    assert_eq!(stats.total_orders, 2);
    assert_eq!(stats.pending_orders, 1);
    assert_eq!(stats.unread_messages, 1);
    assert_eq!(stats.rating_label(), "4.7");
}
