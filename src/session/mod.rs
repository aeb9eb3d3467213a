//! Client-side session reconstruction.
//!
//! This is the local fallback for when no session listing service is
//! available: a single forward scan over the time-ordered log lines, cutting
//! a new session at every entry marker (`LOG-APP` + `App Version`). When the
//! backend supplies sessions they are used verbatim and this scan is skipped
//! (see `service::resolve_sessions`).

use crate::model::{LogLine, Session};
use crate::parser;

/// Result of one reconstruction pass: the session records plus the session id
/// assigned to each input line, index-aligned with the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionScan {
    /// Reconstructed sessions, ids contiguous and ascending from 1.
    pub sessions: Vec<Session>,
    /// Session id assigned to each input line.
    pub line_session_ids: Vec<u32>,
}

/// Partition a time-ordered log sequence into sessions.
///
/// A new session opens on every entry marker, and also on the very first line
/// regardless of markers, so any non-empty input yields at least one session.
/// Every line counts toward whichever session is open when it is processed,
/// and pushes that session's `end_time` forward when it carries a derivable
/// time. `NAVIGATE-TO` screen tokens are appended to the open session's
/// screen list in order, duplicates kept.
pub fn scan_sessions(logs: &[LogLine]) -> SessionScan {
    let mut session_id: u32 = 0;
    let mut current: Option<Session> = None;
    let mut sessions = Vec::new();
    let mut line_session_ids = Vec::with_capacity(logs.len());

    for log in logs {
        let time = log.effective_time();
        let is_entry = parser::is_entry_marker(&log.message);

        if is_entry || session_id == 0 {
            if let Some(mut prev) = current.take() {
                if prev.end_time.is_none() {
                    prev.end_time = time.clone();
                }
                sessions.push(prev);
            }
            session_id += 1;
            current = Some(Session {
                device_id: log.device_id.clone(),
                session_id,
                start_time: time.clone(),
                end_time: time.clone(),
                entries_count: 0,
                screens: Vec::new(),
                filename: None,
            });
        }

        if let Some(cur) = current.as_mut() {
            cur.entries_count += 1;
            if time.is_some() {
                cur.end_time = time;
            }
            if let Some(screen) = parser::capture_screen(&log.message) {
                cur.screens.push(screen.to_string());
            }
        }
        line_session_ids.push(session_id);
    }

    if let Some(last) = current.take() {
        sessions.push(last);
    }

    SessionScan {
        sessions,
        line_session_ids,
    }
}

/// Convenience wrapper returning only the session records.
pub fn reconstruct_sessions(logs: &[LogLine]) -> Vec<Session> {
    scan_sessions(logs).sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine::new("dev-1", message)
    }

    fn sample_logs() -> Vec<LogLine> {
        vec![
            line("04:33:11:676 LOG-APP App Version 1.0"),
            line("04:33:12:000 NAVIGATE-TO: {screen: Home}"),
            line("04:33:15:500 ERROR something failed"),
            line("04:34:00:000 LOG-APP App Version 1.0"),
            line("04:34:01:000 NAVIGATE-TO: {screen: Settings}"),
        ]
    }

    #[test]
    fn scan_splits_on_entry_markers() {
        let scan = scan_sessions(&sample_logs());
        assert_eq!(scan.sessions.len(), 2);

        let first = &scan.sessions[0];
        assert_eq!(first.session_id, 1);
        assert_eq!(first.entries_count, 3);
        assert_eq!(first.screens, vec!["Home"]);
        assert_eq!(first.start_time.as_deref(), Some("04:33:11:676"));
        assert_eq!(first.end_time.as_deref(), Some("04:33:15:500"));

        let second = &scan.sessions[1];
        assert_eq!(second.session_id, 2);
        assert_eq!(second.entries_count, 2);
        assert_eq!(second.screens, vec!["Settings"]);
    }

    #[test]
    fn scan_assigns_line_session_ids() {
        let scan = scan_sessions(&sample_logs());
        assert_eq!(scan.line_session_ids, vec![1, 1, 1, 2, 2]);
    }

    #[test]
    fn logs_without_entry_markers_yield_exactly_one_session() {
        let logs = vec![
            line("04:00:00:000 INFO boot"),
            line("04:00:01:000 NAVIGATE-TO: {screen: Home}"),
            line("04:00:02:000 DEBUG tick"),
        ];
        let scan = scan_sessions(&logs);
        assert_eq!(scan.sessions.len(), 1);
        assert_eq!(scan.sessions[0].session_id, 1);
        assert_eq!(scan.sessions[0].entries_count, 3);
        assert_eq!(scan.line_session_ids, vec![1, 1, 1]);
    }

    #[test]
    fn empty_input_yields_no_sessions() {
        let scan = scan_sessions(&[]);
        assert!(scan.sessions.is_empty());
        assert!(scan.line_session_ids.is_empty());
    }

    #[test]
    fn session_ids_are_contiguous_from_one() {
        let logs = vec![
            line("04:00:00:000 LOG-APP App Version 1.0"),
            line("04:01:00:000 LOG-APP App Version 1.0"),
            line("04:02:00:000 LOG-APP App Version 1.0"),
        ];
        let sessions = reconstruct_sessions(&logs);
        let ids: Vec<u32> = sessions.iter().map(|s| s.session_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn entries_count_matches_lines_assigned() {
        let scan = scan_sessions(&sample_logs());
        for session in &scan.sessions {
            let assigned = scan
                .line_session_ids
                .iter()
                .filter(|&&id| id == session.session_id)
                .count();
            assert_eq!(session.entries_count as usize, assigned);
        }
    }

    #[test]
    fn duplicate_screens_are_preserved_in_order() {
        let logs = vec![
            line("04:00:00:000 LOG-APP App Version 1.0"),
            line("04:00:01:000 NAVIGATE-TO: {screen: Home}"),
            line("04:00:02:000 NAVIGATE-TO: {screen: Detail}"),
            line("04:00:03:000 NAVIGATE-TO: {screen: Home}"),
        ];
        let sessions = reconstruct_sessions(&logs);
        assert_eq!(sessions[0].screens, vec!["Home", "Detail", "Home"]);
    }

    #[test]
    fn lines_without_time_do_not_clear_end_time() {
        let logs = vec![
            line("04:00:00:000 LOG-APP App Version 1.0"),
            line("no timestamp on this line"),
        ];
        let sessions = reconstruct_sessions(&logs);
        assert_eq!(sessions[0].end_time.as_deref(), Some("04:00:00:000"));
        assert_eq!(sessions[0].entries_count, 2);
    }
}
