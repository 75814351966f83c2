//! Human-readable "time ago" rendering of normalized instants.

use chrono::{DateTime, Utc};

use super::normalizer::UNKNOWN_INSTANT;

/// Label rendered for the sentinel instant.
pub const UNKNOWN_LABEL: &str = "unknown";

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;

/// Render a normalized instant relative to `now_ms`.
///
/// Buckets: under a minute is "just now", under an hour "N min ago", under
/// a day "N h ago", anything older an absolute date-time. The sentinel
/// always renders as the unknown label.
pub fn format_relative(instant_ms: i64, now_ms: i64) -> String {
    if instant_ms == UNKNOWN_INSTANT {
        return UNKNOWN_LABEL.to_string();
    }

    let diff = now_ms - instant_ms;
    if diff < MINUTE_MS {
        "just now".to_string()
    } else if diff < HOUR_MS {
        format!("{} min ago", diff / MINUTE_MS)
    } else if diff < DAY_MS {
        format!("{} h ago", diff / HOUR_MS)
    } else {
        match DateTime::<Utc>::from_timestamp_millis(instant_ms) {
            Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
            None => UNKNOWN_LABEL.to_string(),
        }
    }
}

/// [`format_relative`] against the system clock.
pub fn format_relative_now(instant_ms: i64) -> String {
    format_relative(instant_ms, Utc::now().timestamp_millis())
}

/// Render only the clock time (`HH:MM`) of a normalized instant.
pub fn format_clock_time(instant_ms: i64) -> String {
    if instant_ms == UNKNOWN_INSTANT {
        return UNKNOWN_LABEL.to_string();
    }
    match DateTime::<Utc>::from_timestamp_millis(instant_ms) {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => UNKNOWN_LABEL.to_string(),
    }
}
