//! Raw log line type and severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single raw log line as received from upload or backend pagination.
///
/// Immutable once constructed. `time` may be absent; consumers fall back to
/// [`crate::parser::extract_timestamp`] on `message`. `session_id` is absent
/// until assigned by the backend or by local session reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// Backend-assigned record id, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Device the line was recorded on.
    pub device_id: String,
    /// Raw message text.
    pub message: String,
    /// Timestamp as recorded by the backend, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Session the line belongs to, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<u32>,
}

impl LogLine {
    /// Build a bare line with just a device id and message.
    pub fn new(device_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: None,
            device_id: device_id.into(),
            message: message.into(),
            time: None,
            session_id: None,
        }
    }

    /// Effective timestamp: the recorded `time` if present and non-empty,
    /// otherwise extracted from the message. `None` when neither yields one.
    pub fn effective_time(&self) -> Option<String> {
        match &self.time {
            Some(t) if !t.is_empty() => Some(t.clone()),
            _ => crate::parser::extract_timestamp(&self.message),
        }
    }
}

/// Log severity, classified from message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Errors and exceptions.
    Error,
    /// Warnings.
    Warning,
    /// Informational (also the default for unclassifiable lines).
    Info,
    /// Debug chatter.
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}
