//! Reconstructed or backend-supplied session records.

use serde::{Deserialize, Serialize};

/// One user/app run: a contiguous stretch of log lines bounded by entry
/// markers.
///
/// Either supplied verbatim by the session listing service or produced by the
/// local reconstructor. Immutable within one analysis pass; the whole list is
/// rebuilt from scratch when the underlying log set changes.
///
/// Invariants: `session_id` values form a contiguous ascending sequence
/// starting at 1; `entries_count` equals the number of lines assigned to the
/// session; `start_time <= end_time` whenever both are derivable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Device the session was recorded on.
    pub device_id: String,
    /// 1-based ascending session number.
    pub session_id: u32,
    /// Timestamp of the first line, when derivable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Timestamp of the last line with a derivable time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Number of log lines assigned to this session.
    pub entries_count: u32,
    /// Screens visited, in visit order, duplicates kept.
    #[serde(default)]
    pub screens: Vec<String>,
    /// Source file the session came from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Session {
    /// Session duration in milliseconds.
    ///
    /// `None` unless both times are present, well-formed `HH:MM:SS:mm(m)`
    /// values with a strictly positive difference. Malformed or zero-length
    /// sessions are invisible to duration statistics by design.
    pub fn duration_ms(&self) -> Option<u64> {
        let start = crate::stats::parse_time_hms_ms(self.start_time.as_deref()?);
        let end = crate::stats::parse_time_hms_ms(self.end_time.as_deref()?);
        if end > start {
            Some(end - start)
        } else {
            None
        }
    }
}
