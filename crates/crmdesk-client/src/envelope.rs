//! The backend's JSON response envelope.

use serde::Deserialize;

/// Standard `{success, data, error}` wrapper every data endpoint uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the backend considers the request handled.
    #[serde(default)]
    pub success: bool,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
    /// Server-side error description, present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, or the server's error message.
    pub fn into_data(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "response carried no data".to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "backend reported failure".to_string()))
        }
    }
}
