//! Summary statistics derived from logs and sessions.

use crate::model::{LogLevel, LogLine, Session};
use crate::parser;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Strict day-relative time: exactly `HH:MM:SS:` plus a 2- or 3-digit
/// millisecond field, nothing else.
static STRICT_HMS_MS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2}):(\d{2,3})$").unwrap());

/// Key metrics for the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Total log events in scope.
    pub total_events: u64,
    /// Human-formatted average session duration ("1m 30s", "0s", ...).
    pub average_session_duration: String,
    /// Events classified ERROR.
    pub total_crashes: u64,
    /// `max(0, total_events - total_crashes)`.
    pub crash_free_sessions: u64,
}

/// Parse a strict `HH:MM:SS:mm(m)` time into milliseconds since day start.
///
/// Malformed or empty values parse to 0; callers filter by positive duration,
/// so malformed timestamps are excluded from averages rather than counted as
/// zero-length samples.
pub fn parse_time_hms_ms(t: &str) -> u64 {
    let Some(caps) = STRICT_HMS_MS.captures(t.trim()) else {
        return 0;
    };
    // Captures are all-digit by construction.
    let field = |i: usize| caps[i].parse::<u64>().unwrap_or(0);
    let (hh, mm, ss, ms) = (field(1), field(2), field(3), field(4));
    (hh * 3600 + mm * 60 + ss) * 1000 + ms
}

/// Format a millisecond duration for display.
///
/// At least an hour: `"Hh Mm"`; at least a minute: `"Mm Ss"`; otherwise
/// `"Ss"`; zero: `"0s"`.
pub fn format_duration(ms: u64) -> String {
    if ms == 0 {
        return "0s".to_string();
    }
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Compute the summary metrics for a set of logs and sessions.
///
/// `total_override` and `error_override` carry the backend's per-session
/// snapshot counts when the full log set is not loaded client-side; when
/// absent, counts come from the provided logs. The average duration covers
/// only sessions with both times present, well-formed, and strictly positive
/// span, and is integer-truncated before formatting.
pub fn compute_statistics(
    logs: &[LogLine],
    sessions: &[Session],
    total_override: Option<u64>,
    error_override: Option<u64>,
) -> Statistics {
    let total_events = total_override.unwrap_or(logs.len() as u64);
    let total_crashes = error_override.unwrap_or_else(|| {
        logs.iter()
            .filter(|log| parser::classify_level(&log.message) == LogLevel::Error)
            .count() as u64
    });
    let crash_free_sessions = total_events.saturating_sub(total_crashes);

    let durations: Vec<u64> = sessions.iter().filter_map(Session::duration_ms).collect();
    let average_session_duration = if durations.is_empty() {
        "0s".to_string()
    } else {
        let avg = durations.iter().sum::<u64>() / durations.len() as u64;
        format_duration(avg)
    };

    Statistics {
        total_events,
        average_session_duration,
        total_crashes,
        crash_free_sessions,
    }
}
