//! Built-in demo datasets.
//!
//! Shown whenever the backend is unreachable or returns garbage, so the
//! console renders something meaningful instead of an empty screen.

use serde_json::Value;

use crmdesk_core::types::{
    ChatMessage, ChatOrder, IncomingMessage, Order, OrderStatus, RatingSummary, Review,
    SupportRequest,
};

fn ts(raw: &str) -> Value {
    Value::String(raw.to_string())
}

/// Demo orders.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: 1,
            username: Some("john_doe".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            service_name: "AI Telegram Bot".to_string(),
            message: "Need a bot to automate sales".to_string(),
            status: OrderStatus::Pending,
            timestamp: ts("2024-12-19 10:30:00"),
            admin_comment: None,
        },
        Order {
            id: 2,
            username: Some("jane_smith".to_string()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Smith".to_string()),
            service_name: "Channel Automation".to_string(),
            message: "Looking to automate my channel".to_string(),
            status: OrderStatus::Processing,
            timestamp: ts("2024-12-18 15:45:00"),
            admin_comment: None,
        },
    ]
}

/// Demo incoming messages.
pub fn incoming_messages() -> Vec<IncomingMessage> {
    vec![
        IncomingMessage {
            id: 1,
            username: Some("user1".to_string()),
            first_name: Some("User".to_string()),
            message: "Hello! Interested in bot development".to_string(),
            timestamp: ts("2024-12-19 11:00:00"),
            processed: false,
        },
        IncomingMessage {
            id: 2,
            username: Some("user2".to_string()),
            first_name: Some("Client".to_string()),
            message: "Thanks for the great work!".to_string(),
            timestamp: ts("2024-12-18 16:30:00"),
            processed: true,
        },
    ]
}

/// Demo chat conversations.
pub fn chat_orders() -> Vec<ChatOrder> {
    vec![
        ChatOrder {
            id: 1,
            username: Some("john_doe".to_string()),
            first_name: Some("John".to_string()),
            service_name: "AI Telegram Bot".to_string(),
            status: OrderStatus::Active,
            last_message: Some("When will the bot be ready?".to_string()),
            timestamp: ts("2024-12-19 10:30:00"),
        },
        ChatOrder {
            id: 2,
            username: Some("jane_smith".to_string()),
            first_name: Some("Jane".to_string()),
            service_name: "Channel Automation".to_string(),
            status: OrderStatus::Completed,
            last_message: Some("Thanks for the work!".to_string()),
            timestamp: ts("2024-12-18 15:45:00"),
        },
    ]
}

/// Demo messages for one conversation.
pub fn chat_messages(order_id: i64) -> Vec<ChatMessage> {
    vec![
        ChatMessage {
            id: 1,
            order_id,
            message: "Hello! I have a question about my order".to_string(),
            is_admin: false,
            timestamp: ts("2024-12-19 10:30:00"),
            username: Some("user123".to_string()),
            first_name: Some("User".to_string()),
        },
        ChatMessage {
            id: 2,
            order_id,
            message: "Hello! Happy to help. What would you like to know?".to_string(),
            is_admin: true,
            timestamp: ts("2024-12-19 10:32:00"),
            username: None,
            first_name: None,
        },
    ]
}

/// Demo support tickets.
pub fn support_requests() -> Vec<SupportRequest> {
    vec![
        SupportRequest {
            id: 1,
            username: Some("user1".to_string()),
            first_name: Some("User".to_string()),
            name: Some("Ivan Ivanov".to_string()),
            subject: "Technical support".to_string(),
            message: "I cannot sign in to the system".to_string(),
            timestamp: ts("2024-12-19 12:00:00"),
            processed: false,
        },
        SupportRequest {
            id: 2,
            username: Some("user2".to_string()),
            first_name: Some("Client".to_string()),
            name: Some("Petr Petrov".to_string()),
            subject: "Feature question".to_string(),
            message: "How do I use the new feature?".to_string(),
            timestamp: ts("2024-12-18 17:00:00"),
            processed: true,
        },
    ]
}

/// Demo reviews.
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            username: Some("user1".to_string()),
            first_name: Some("User".to_string()),
            rating: 5,
            comment: "Excellent work, delivered on time".to_string(),
            timestamp: ts("2024-12-19 13:00:00"),
        },
        Review {
            id: 2,
            username: Some("user2".to_string()),
            first_name: Some("Client".to_string()),
            rating: 4,
            comment: "Good result, could have been faster".to_string(),
            timestamp: ts("2024-12-18 18:00:00"),
        },
    ]
}

/// Demo aggregate rating.
pub fn rating_summary() -> RatingSummary {
    RatingSummary {
        average_rating: 4.7,
        total_reviews: 15,
    }
}
