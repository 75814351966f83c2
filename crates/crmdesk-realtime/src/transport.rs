//! Transport abstraction for the push channel.
//!
//! The channel itself never talks to the network; it consumes whatever
//! stream of raw event payloads a transport yields. The client crate
//! provides the SSE implementation; tests provide scripted ones.

use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

use crmdesk_core::error::AppError;

/// Errors produced by a push transport.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The subscription could not be opened.
    #[error("failed to open event stream: {0}")]
    Connect(String),
    /// The open subscription failed mid-stream.
    #[error("event stream failed: {0}")]
    Stream(String),
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        AppError::transport(err.to_string())
    }
}

/// Stream of raw event payloads, one `String` per pushed event.
pub type EventStream = BoxStream<'static, Result<String, TransportError>>;

/// A source of server-push events.
#[async_trait]
pub trait EventTransport: Send + Sync {
    /// Open the inbound subscription.
    async fn open(&self) -> Result<EventStream, TransportError>;
}
