//! Analysis state: the single owner of sessions, the log cursor, the graph,
//! and its layout.
//!
//! Every derived value (statistics, layout) is recomputed from scratch on the
//! triggering change; nothing accumulates across recomputations. Fetched
//! results are applied through generation-tagged methods so a response that
//! arrives after the selection has moved on is dropped instead of clobbering
//! newer state.

use crate::cursor::LogCursor;
use crate::graph;
use crate::layout::{self, FlowchartLayout, LayoutDirection};
use crate::model::{FlowchartPayload, LogLine, NavEdge, NavGraph, Session};
use crate::service::{
    resolve_sessions, EdgeDetailService, FlowchartService, LogQueryService, SessionService,
};
use crate::stats::{self, Statistics};
use tracing::{debug, warn};

/// Top-level mutable state for one analysis view.
#[derive(Debug, Default)]
pub struct AnalysisState {
    sessions: Vec<Session>,
    sessions_loaded: bool,
    selected_session: Option<u32>,
    generation: u64,
    cursor: LogCursor,
    graph: NavGraph,
    layout: Option<FlowchartLayout>,
    direction: LayoutDirection,
    selected_edge: Option<NavEdge>,
    transition_events: Vec<LogLine>,
}

impl AnalysisState {
    /// One-time initialization: resolve the session list (remote or local
    /// fallback) and select the default session.
    ///
    /// Guarded against duplicate invocation; repeated calls after the first
    /// are no-ops.
    pub fn initialize<S>(&mut self, service: &S, logs: &[LogLine])
    where
        S: SessionService + LogQueryService + FlowchartService,
    {
        if self.sessions_loaded {
            return;
        }
        self.sessions_loaded = true;
        self.sessions = resolve_sessions(service, logs);

        // Session 1 when present, otherwise the first listed session.
        let default = self
            .sessions
            .iter()
            .find(|s| s.session_id == 1)
            .or_else(|| self.sessions.first())
            .map(|s| s.session_id);
        self.select_session(service, default);
    }

    /// Switch the selected session and refresh everything derived from it.
    ///
    /// Failures from either collaborator degrade to an empty-but-valid
    /// rendering with a logged diagnostic, never an error.
    pub fn select_session<S>(&mut self, service: &S, session_id: Option<u32>)
    where
        S: LogQueryService + FlowchartService,
    {
        let generation = self.begin_selection(session_id);

        if let Err(err) = self.cursor.open(service, session_id) {
            warn!(error = %err, ?session_id, "log fetch failed; showing empty log set");
            self.cursor = LogCursor::default();
        }

        let payload = match service.fetch_graph(session_id) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, ?session_id, "graph fetch failed; showing empty graph");
                FlowchartPayload::Graph(NavGraph::default())
            }
        };
        self.apply_graph(generation, payload);
    }

    /// Start a new selection and return its generation tag.
    ///
    /// Any in-flight result tagged with an older generation will be dropped
    /// by the `apply_*` methods.
    pub fn begin_selection(&mut self, session_id: Option<u32>) -> u64 {
        self.generation += 1;
        self.selected_session = session_id;
        self.selected_edge = None;
        self.transition_events.clear();
        self.generation
    }

    /// Apply a fetched graph payload, unless the selection has moved on.
    pub fn apply_graph(&mut self, generation: u64, payload: FlowchartPayload) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale graph response");
            return;
        }
        self.graph = graph::normalize_payload(payload);
        self.layout = Some(layout::compute_layout(&self.graph, self.direction));
    }

    /// Apply fetched transition events, unless the selection has moved on.
    pub fn apply_transition_events(&mut self, generation: u64, events: Vec<LogLine>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale edge response");
            return;
        }
        self.transition_events = events;
    }

    /// Toggle the layout direction, recomputing the layout in place.
    pub fn set_layout_direction(&mut self, direction: LayoutDirection) {
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.layout = Some(layout::compute_layout(&self.graph, self.direction));
    }

    /// Select an edge and fetch its transition detail.
    ///
    /// An edge not present in the current graph clears the selection. A
    /// failing detail fetch degrades to an empty event list.
    pub fn select_edge<S>(&mut self, service: &S, from: &str, to: &str)
    where
        S: EdgeDetailService,
    {
        let generation = self.generation;
        self.selected_edge = self
            .graph
            .edges
            .iter()
            .find(|e| e.from == from && e.to == to)
            .cloned();
        if self.selected_edge.is_none() {
            self.transition_events.clear();
            return;
        }

        let events = match service.fetch_transition_events(from, to, self.selected_session) {
            Ok(events) => events,
            Err(err) => {
                warn!(error = %err, from, to, "edge detail fetch failed; showing no events");
                Vec::new()
            }
        };
        self.apply_transition_events(generation, events);
    }

    /// Load the next server page into the cursor. Returns whether a fetch
    /// was issued; failures degrade to "no more data" with a diagnostic.
    pub fn load_more<S: LogQueryService + ?Sized>(&mut self, service: &S) -> bool {
        match self.cursor.load_more(service) {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "load-more fetch failed");
                false
            }
        }
    }

    /// Summary statistics over the current session scope, using the counts
    /// snapshotted at session open.
    pub fn statistics(&self) -> Statistics {
        stats::compute_statistics(
            self.cursor.buffer(),
            &self.sessions,
            Some(self.cursor.total_count()),
            Some(self.cursor.error_count()),
        )
    }

    /// Resolved session list.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Currently selected session.
    pub fn selected_session(&self) -> Option<u32> {
        self.selected_session
    }

    /// Current navigation graph.
    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Current layout, once a session has been selected.
    pub fn layout(&self) -> Option<&FlowchartLayout> {
        self.layout.as_ref()
    }

    /// Current layout direction.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// The log cursor for the selected session.
    pub fn cursor(&self) -> &LogCursor {
        &self.cursor
    }

    /// Mutable cursor access for search and client paging.
    pub fn cursor_mut(&mut self) -> &mut LogCursor {
        &mut self.cursor
    }

    /// Currently selected edge, if any.
    pub fn selected_edge(&self) -> Option<&NavEdge> {
        self.selected_edge.as_ref()
    }

    /// Transition events for the selected edge.
    pub fn transition_events(&self) -> &[LogLine] {
        &self.transition_events
    }
}
