//! JSON output formatting
//!
//! Every JSON document printed by the CLI has the shape
//! `{"data": ..., "meta": {"timestamp", "version", "count"?}}`.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonDocument<T> {
    pub data: T,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    /// RFC 3339, second precision, UTC
    pub timestamp: String,
    pub version: &'static str,
    /// Number of items, for list output only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Meta {
    fn now(count: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION"),
            count,
        }
    }
}

impl<T> JsonDocument<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Meta::now(None),
        }
    }
}

impl<'a, T> JsonDocument<&'a [T]> {
    pub fn list(items: &'a [T]) -> Self {
        Self {
            data: items,
            meta: Meta::now(Some(items.len())),
        }
    }
}

/// Pretty-print a single record
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonDocument::new(data))
}

/// Pretty-print a list, with its length in `meta.count`
pub fn format_json_list<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonDocument::list(items))
}
