//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Placeholder for missing values
pub const DASH: &str = "--";

/// Truncate string to `max_len` characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM` UTC.
///
/// Unparseable values are returned as-is, empty ones as a dash.
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.trim().is_empty() {
        return DASH.to_string();
    }

    match timestamp.parse::<DateTime<Utc>>() {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DASH.to_string(),
    }
}

pub fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}
