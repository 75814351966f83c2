//! Chat conversation ordering.
//!
//! Conversations render oldest first, the opposite direction from the
//! activity feed. The same discipline covers both the historical load and
//! the optimistic insertion of a just-sent admin reply before the server
//! echo arrives; the two sides may carry different timestamp formats and
//! must normalize to the same comparable instant.

use crmdesk_core::time::normalize;
use crmdesk_core::types::ChatMessage;

/// Append a freshly sent message and restore ascending order.
///
/// The sort is stable, so messages with equal instants keep their relative
/// insertion order (existing history before the new message).
pub fn merge_chat(mut messages: Vec<ChatMessage>, new_message: ChatMessage) -> Vec<ChatMessage> {
    messages.push(new_message);
    sort_oldest_first(&mut messages);
    messages
}

/// Extract one conversation from a mixed record set, oldest first.
pub fn conversation_thread(records: &[ChatMessage], order_id: i64) -> Vec<ChatMessage> {
    let mut thread: Vec<ChatMessage> = records
        .iter()
        .filter(|m| m.order_id == order_id)
        .cloned()
        .collect();
    sort_oldest_first(&mut thread);
    thread
}

fn sort_oldest_first(messages: &mut [ChatMessage]) {
    messages.sort_by_key(|m| normalize(&m.timestamp));
}
