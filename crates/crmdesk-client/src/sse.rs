//! `text/event-stream` implementation of the push transport.
//!
//! Decodes the SSE wire format down to the bare minimum the backend uses:
//! frames separated by a blank line, payload carried on `data:` lines.
//! Comment and `event:` lines are skipped; an incomplete frame at end of
//! stream is discarded.

use std::collections::VecDeque;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, Stream, StreamExt};

use crmdesk_core::config::backend::BackendConfig;
use crmdesk_core::error::AppError;
use crmdesk_core::result::AppResult;
use crmdesk_realtime::{EventStream, EventTransport, TransportError};

/// SSE subscription to the backend's push endpoint.
#[derive(Debug, Clone)]
pub struct SseTransport {
    http: reqwest::Client,
    url: String,
}

impl SseTransport {
    /// Build a transport from backend configuration.
    ///
    /// Uses a dedicated HTTP client without a request timeout: the
    /// subscription is expected to stay open indefinitely.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build SSE client: {e}")))?;

        Ok(Self {
            http,
            url: format!(
                "{}{}",
                config.base_url.trim_end_matches('/'),
                config.events_path
            ),
        })
    }
}

#[async_trait]
impl EventTransport for SseTransport {
    async fn open(&self) -> Result<EventStream, TransportError> {
        let response = self
            .http
            .get(&self.url)
            .header(reqwest::header::ACCEPT, "text/event-stream")
            .send()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?
            .error_for_status()
            .map_err(|e| TransportError::Connect(e.to_string()))?;

        Ok(decode_events(response.bytes_stream().boxed()))
    }
}

/// Decoder state threaded through the unfold.
struct Decoder<S> {
    bytes: S,
    buffer: String,
    ready: VecDeque<String>,
    failed: bool,
}

/// Turn a raw byte stream into a stream of event payloads.
///
/// After a transport error the stream yields that error once and then
/// ends; the channel's reconnect loop takes it from there.
fn decode_events<S, E>(bytes: S) -> EventStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + Unpin + 'static,
    E: std::fmt::Display + Send + 'static,
{
    let decoder = Decoder {
        bytes,
        buffer: String::new(),
        ready: VecDeque::new(),
        failed: false,
    };

    stream::unfold(decoder, |mut decoder| async move {
        loop {
            if let Some(payload) = decoder.ready.pop_front() {
                return Some((Ok(payload), decoder));
            }
            if decoder.failed {
                return None;
            }
            match decoder.bytes.next().await {
                Some(Ok(chunk)) => {
                    // Strip carriage returns up front; `\r` may be split
                    // across chunk boundaries, so per-chunk `\r\n`
                    // replacement would miss it.
                    decoder
                        .buffer
                        .extend(String::from_utf8_lossy(&chunk).chars().filter(|c| *c != '\r'));
                    drain_frames(&mut decoder.buffer, &mut decoder.ready);
                }
                Some(Err(e)) => {
                    decoder.failed = true;
                    return Some((Err(TransportError::Stream(e.to_string())), decoder));
                }
                None => return None,
            }
        }
    })
    .boxed()
}

/// Move every complete frame out of `buffer` into `ready`.
fn drain_frames(buffer: &mut String, ready: &mut VecDeque<String>) {
    while let Some(pos) = buffer.find("\n\n") {
        let frame = buffer[..pos].to_string();
        buffer.drain(..pos + 2);
        if let Some(payload) = parse_frame(&frame) {
            ready.push_back(payload);
        }
    }
}

/// Extract the `data:` payload of one frame, if it has any.
fn parse_frame(frame: &str) -> Option<String> {
    let mut data_lines: Vec<&str> = Vec::new();
    for line in frame.lines() {
        if let Some(rest) = line.strip_prefix("data:") {
            data_lines.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    if data_lines.is_empty() {
        None
    } else {
        Some(data_lines.join("\n"))
    }
}
