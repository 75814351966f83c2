//! # crmdesk-client
//!
//! The backend-facing side of the CRMDesk console:
//!
//! - [`ApiClient`]: REST reads that degrade to built-in demo data when the
//!   backend is unreachable (stale or placeholder data beats a blank
//!   screen), and mutating calls that surface the server's error field
//! - [`SseTransport`]: the `text/event-stream` implementation of the
//!   realtime transport abstraction

pub mod api;
pub mod demo;
pub mod envelope;
pub mod sse;

pub use api::ApiClient;
pub use envelope::Envelope;
pub use sse::SseTransport;
