//! # crmdesk-realtime
//!
//! Server-push event plumbing for the CRMDesk console:
//!
//! - typed push events parsed off a raw payload stream
//! - a transport abstraction the client crate implements over SSE
//! - [`RealtimeChannel`]: a single long-lived subscription that recovers
//!   from any failure with a fixed 5-second delay, forever, and fans
//!   parsed events out to registered handlers
//!
//! Channel errors are never fatal and never surfaced to the user.

pub mod channel;
pub mod event;
pub mod handler;
pub mod transport;

pub use channel::{ChannelState, RealtimeChannel, RECONNECT_DELAY};
pub use event::PushEvent;
pub use handler::EventHandler;
pub use transport::{EventStream, EventTransport, TransportError};
