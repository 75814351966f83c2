//! Backend endpoint configuration.

use serde::{Deserialize, Serialize};

/// Backend REST and push-stream endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout for REST calls in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Path of the server-push event stream, relative to `base_url`.
    #[serde(default = "default_events_path")]
    pub events_path: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout(),
            events_path: default_events_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_request_timeout() -> u64 {
    15
}

fn default_events_path() -> String {
    "/api/sse".to_string()
}
