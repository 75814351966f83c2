//! Conversion of heterogeneous timestamp values to epoch milliseconds.
//!
//! [`normalize`] is total over its input domain: it never panics and never
//! returns a negative instant. Anything unparseable maps to
//! [`UNKNOWN_INSTANT`] so a single malformed record degrades to an
//! "unknown" label instead of breaking an entire feed render.

use std::sync::OnceLock;

use chrono::DateTime;
use regex::Regex;
use serde_json::Value;

/// Sentinel instant meaning "unknown/unparseable".
pub const UNKNOWN_INSTANT: i64 = 0;

/// Numeric values at or below this are epoch seconds; above it, epoch
/// milliseconds.
const EPOCH_SECONDS_CUTOFF: i64 = 10_000_000_000;

/// Matches a timezone qualifier: a `Z` anywhere, or a trailing numeric
/// offset (`+HH:MM`, `-HH:MM`, `+HHMM`).
///
/// The unanchored `Z` alternative and the trailing-offset alternative both
/// over-match on purpose: a string ending in a bare `-NNNN` (say a
/// `DD-MM-YYYY` date) is treated as offset-qualified and then fails to
/// parse, yielding the sentinel. The backend data format is external and
/// unverified, so this is preserved behavior rather than silently "fixed".
fn tz_qualifier() -> &'static Regex {
    static TZ_QUALIFIER: OnceLock<Regex> = OnceLock::new();
    TZ_QUALIFIER.get_or_init(|| Regex::new(r"Z|[+-]\d{2}:?\d{2}$").expect("valid static pattern"))
}

/// Normalize any supported timestamp representation to epoch milliseconds.
///
/// - Numbers at or below 10^10 are epoch seconds and are scaled to
///   milliseconds (flooring); larger numbers are already milliseconds.
/// - Strings without a timezone qualifier are assumed UTC: the backend
///   emits naive timestamps that are actually UTC, and treating them as
///   local time would skew every "time ago" display.
/// - Anything else, and anything that fails to parse, yields
///   [`UNKNOWN_INSTANT`]. Negative instants (pre-epoch) are collapsed to
///   the sentinel as well.
pub fn normalize(value: &Value) -> i64 {
    let millis = match value {
        Value::Number(n) => normalize_number(n),
        Value::String(s) => normalize_str(s),
        _ => UNKNOWN_INSTANT,
    };
    millis.max(UNKNOWN_INSTANT)
}

fn normalize_number(n: &serde_json::Number) -> i64 {
    if let Some(i) = n.as_i64() {
        if i <= EPOCH_SECONDS_CUTOFF {
            i.saturating_mul(1000)
        } else {
            i
        }
    } else if let Some(f) = n.as_f64() {
        if !f.is_finite() {
            return UNKNOWN_INSTANT;
        }
        let scaled = if f <= EPOCH_SECONDS_CUTOFF as f64 {
            (f * 1000.0).floor()
        } else {
            f.floor()
        };
        if scaled >= i64::MIN as f64 && scaled <= i64::MAX as f64 {
            scaled as i64
        } else {
            UNKNOWN_INSTANT
        }
    } else {
        UNKNOWN_INSTANT
    }
}

/// Normalize a timestamp string to epoch milliseconds.
///
/// Returns [`UNKNOWN_INSTANT`] when the string cannot be parsed.
pub fn normalize_str(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN_INSTANT;
    }

    let qualified = if tz_qualifier().is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{trimmed}Z")
    };

    parse_qualified(&qualified)
        .map(|ms| ms.max(UNKNOWN_INSTANT))
        .unwrap_or(UNKNOWN_INSTANT)
}

/// Parse a timezone-qualified date-time string.
///
/// Accepts RFC 3339 with either `T` or space as the date/time separator,
/// with or without fractional seconds, and numeric offsets with or without
/// a colon.
fn parse_qualified(s: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }

    // Backend strings use a space separator, which RFC 3339 rejects.
    let with_t = match s.find(' ') {
        Some(pos) => {
            let mut owned = s.to_string();
            owned.replace_range(pos..pos + 1, "T");
            owned
        }
        None => s.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&with_t) {
        return Some(dt.timestamp_millis());
    }

    // Colonless offsets such as `+0300`.
    DateTime::parse_from_str(&with_t, "%Y-%m-%dT%H:%M:%S%.f%z")
        .ok()
        .map(|dt| dt.timestamp_millis())
}
