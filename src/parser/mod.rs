//! Pure classification and extraction over raw log message text.
//!
//! Everything here is a total function: unclassifiable or malformed input
//! degrades to a default (`Info`, `None`, `"Unknown event"`), never an error.
//! These are the shared patterns used by session reconstruction, statistics,
//! and the log-derived graph builder.

use crate::model::LogLevel;
use once_cell::sync::Lazy;
use regex::Regex;

/// ISO-like datetime anywhere in the message: `YYYY-MM-DD HH:MM:SS`.
static ISO_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}").unwrap());

/// Day-relative timestamp anchored at the start: `HH:MM:SS:mm` or `HH:MM:SS:mmm`.
static LEADING_HMS_MS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}:\d{2,3}").unwrap());

/// ISO datetime prefix plus trailing whitespace, for event extraction.
static ISO_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\s*").unwrap());

/// Screen-navigation marker: `NAVIGATE-TO : { screen : X }` with loose
/// whitespace around the delimiters.
static NAVIGATE_TO: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"NAVIGATE-TO\s*:\s*\{\s*screen\s*:\s*([^}\s,]+)").unwrap());

/// Classify a message's severity by case-insensitive substring match.
///
/// Precedence: ERROR/EXCEPTION, then WARNING/WARN, then INFO, then DEBUG.
/// Unmatched (including empty) messages default to `Info`.
pub fn classify_level(message: &str) -> LogLevel {
    let upper = message.to_uppercase();
    if upper.contains("ERROR") || upper.contains("EXCEPTION") {
        LogLevel::Error
    } else if upper.contains("WARNING") || upper.contains("WARN") {
        LogLevel::Warning
    } else if upper.contains("INFO") {
        LogLevel::Info
    } else if upper.contains("DEBUG") {
        LogLevel::Debug
    } else {
        LogLevel::Info
    }
}

/// Extract a timestamp from message text.
///
/// Tries an ISO-like `YYYY-MM-DD HH:MM:SS` anywhere in the message first,
/// then a day-relative `HH:MM:SS:mmm` (2-3 digit milliseconds) anchored at
/// the start of the string. `None` when neither matches.
pub fn extract_timestamp(message: &str) -> Option<String> {
    if let Some(m) = ISO_DATETIME.find(message) {
        return Some(m.as_str().to_string());
    }
    LEADING_HMS_MS
        .find(message)
        .map(|m| m.as_str().to_string())
}

/// Extract the event description from a message.
///
/// Strips a leading ISO-datetime prefix when present. A message consisting of
/// nothing but that prefix is returned unchanged; an empty message yields
/// `"Unknown event"`.
pub fn extract_event(message: &str) -> String {
    if message.is_empty() {
        return "Unknown event".to_string();
    }
    let stripped = ISO_PREFIX.replace(message, "");
    if stripped.is_empty() {
        message.to_string()
    } else {
        stripped.into_owned()
    }
}

/// Whether the line is a session entry marker (app launch).
pub fn is_entry_marker(message: &str) -> bool {
    message.contains("LOG-APP") && message.contains("App Version")
}

/// Capture the screen token of a `NAVIGATE-TO` marker, if the line has one.
pub fn capture_screen(message: &str) -> Option<&str> {
    NAVIGATE_TO
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
