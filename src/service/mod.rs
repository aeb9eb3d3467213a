//! Upstream service seams.
//!
//! Every external collaborator is a trait so the rest of the crate never
//! cares whether data comes from a remote backend or from a file parsed
//! locally. `LocalLogStore` is the in-memory implementation backing the CLI
//! and the local-fallback path; a remote HTTP client would implement the same
//! traits.

use crate::graph;
use crate::model::{FlowchartPayload, LogLine, ServiceError, Session};
use crate::parser;
use crate::session;
use tracing::debug;

/// One page of logs plus the server's total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPage {
    /// Records in this page, in log order.
    pub logs: Vec<LogLine>,
    /// Total matching records across all pages.
    pub total_logs: u64,
}

/// Paginated log query: `page` is 1-based.
pub trait LogQueryService {
    /// Fetch one page of logs, optionally scoped to a session.
    fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
        session_id: Option<u32>,
    ) -> Result<LogPage, ServiceError>;
}

/// Session listing. Implementations that cannot enumerate sessions should
/// return `ServiceError::Unavailable`; callers treat that as the signal to
/// reconstruct sessions locally, not as a failure.
pub trait SessionService {
    /// List all known sessions.
    fn list_sessions(&self) -> Result<Vec<Session>, ServiceError>;
}

/// Navigation-graph query, in either upstream payload shape.
pub trait FlowchartService {
    /// Fetch the navigation graph, optionally scoped to a session.
    fn fetch_graph(&self, session_id: Option<u32>) -> Result<FlowchartPayload, ServiceError>;
}

/// Transition-detail query for a selected edge.
pub trait EdgeDetailService {
    /// Log lines recorded between a `from_state` screen and the next
    /// `to_state` screen, across every occurrence of that transition.
    fn fetch_transition_events(
        &self,
        from_state: &str,
        to_state: &str,
        session_id: Option<u32>,
    ) -> Result<Vec<LogLine>, ServiceError>;
}

/// Raw log text retrieval for the raw-file viewer.
pub trait RawFileService {
    /// Full formatted text, optionally scoped to a session.
    fn fetch_raw(&self, session_id: Option<u32>) -> Result<String, ServiceError>;
}

/// Resolve the session list through the capability probe.
///
/// A remote listing that succeeds with a non-empty result wins. An error or
/// an empty listing both mean "this deployment cannot enumerate sessions",
/// and the list is reconstructed locally from the log lines instead. Neither
/// outcome is an error to the caller.
pub fn resolve_sessions<S: SessionService + ?Sized>(
    service: &S,
    logs: &[LogLine],
) -> Vec<Session> {
    match service.list_sessions() {
        Ok(sessions) if !sessions.is_empty() => sessions,
        Ok(_) => {
            debug!("session listing empty; reconstructing sessions locally");
            session::reconstruct_sessions(logs)
        }
        Err(err) => {
            debug!(error = %err, "session listing unavailable; reconstructing sessions locally");
            session::reconstruct_sessions(logs)
        }
    }
}

/// In-memory log store implementing every service trait.
///
/// Construction runs one session scan over the input and stamps each line
/// with its line id and assigned session id; all queries afterwards are pure
/// reads.
#[derive(Debug, Clone)]
pub struct LocalLogStore {
    logs: Vec<LogLine>,
    sessions: Vec<Session>,
}

impl LocalLogStore {
    /// Build a store from raw log lines.
    pub fn new(mut logs: Vec<LogLine>) -> Self {
        let scan = session::scan_sessions(&logs);
        for (i, log) in logs.iter_mut().enumerate() {
            if log.id.is_none() {
                log.id = Some(i as u64 + 1);
            }
            log.session_id = Some(scan.line_session_ids[i]);
        }
        Self {
            logs,
            sessions: scan.sessions,
        }
    }

    /// All lines, stamped with ids and session assignments.
    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    fn session_logs(&self, session_id: Option<u32>) -> Vec<&LogLine> {
        self.logs
            .iter()
            .filter(|log| session_id.is_none() || log.session_id == session_id)
            .collect()
    }
}

impl LogQueryService for LocalLogStore {
    fn fetch_page(
        &self,
        page: u32,
        per_page: u32,
        session_id: Option<u32>,
    ) -> Result<LogPage, ServiceError> {
        let scoped = self.session_logs(session_id);
        let total_logs = scoped.len() as u64;
        let start = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
        let logs = scoped
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok(LogPage { logs, total_logs })
    }
}

impl SessionService for LocalLogStore {
    fn list_sessions(&self) -> Result<Vec<Session>, ServiceError> {
        Ok(self.sessions.clone())
    }
}

impl FlowchartService for LocalLogStore {
    fn fetch_graph(&self, session_id: Option<u32>) -> Result<FlowchartPayload, ServiceError> {
        let scoped: Vec<LogLine> = self
            .session_logs(session_id)
            .into_iter()
            .cloned()
            .collect();
        Ok(FlowchartPayload::Graph(graph::build_graph_from_logs(
            &scoped,
        )))
    }
}

impl EdgeDetailService for LocalLogStore {
    fn fetch_transition_events(
        &self,
        from_state: &str,
        to_state: &str,
        session_id: Option<u32>,
    ) -> Result<Vec<LogLine>, ServiceError> {
        let mut events = Vec::new();
        let mut pending: Option<Vec<LogLine>> = None;
        let mut current_session = None;

        for log in self.session_logs(session_id) {
            // A transition never spans a session boundary.
            if log.session_id != current_session {
                current_session = log.session_id;
                pending = None;
            }
            match parser::capture_screen(&log.message) {
                Some(screen) if screen == to_state => {
                    // Only lines between a from-marker and the directly
                    // following to-marker belong to this transition.
                    if let Some(batch) = pending.take() {
                        events.extend(batch);
                    }
                    if screen == from_state {
                        pending = Some(Vec::new());
                    }
                }
                Some(screen) => {
                    pending = if screen == from_state {
                        Some(Vec::new())
                    } else {
                        None
                    };
                }
                None => {
                    if let Some(batch) = pending.as_mut() {
                        batch.push(log.clone());
                    }
                }
            }
        }

        Ok(events)
    }
}

impl RawFileService for LocalLogStore {
    fn fetch_raw(&self, session_id: Option<u32>) -> Result<String, ServiceError> {
        let mut out = String::new();
        for log in self.session_logs(session_id) {
            let time = log.effective_time().unwrap_or_default();
            let level = parser::classify_level(&log.message);
            out.push_str(&format!("{time} | {level}: {log}\n", log = log.message));
        }
        Ok(out)
    }
}
