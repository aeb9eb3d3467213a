//! Navigation graph types and the two wire shapes the graph service may
//! answer with.
//!
//! The graph service either returns a ready node/edge graph or a
//! dependency-tree relationship list (`root` + `parent`/`child` rows). Both
//! deserialize through [`FlowchartPayload`]; the `graph` module normalizes
//! either shape into a [`NavGraph`].

use serde::{Deserialize, Serialize};

/// A screen in the navigation graph.
///
/// Metric fields are backend enrichments; they are absent when the graph was
/// derived from a dependency-tree payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavNode {
    /// Unique screen identifier.
    pub id: String,
    /// Human-readable label (defaults to the id).
    pub label: String,
    /// Total visits across the analyzed logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Number of distinct sessions the screen appeared in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_count: Option<u32>,
    /// Share of sessions that visited the screen, in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Timestamp of the first sighting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<String>,
    /// Timestamp of the last sighting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

impl NavNode {
    /// Node with label equal to its id and no metrics.
    pub fn bare(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            count: None,
            session_count: None,
            frequency: None,
            first_seen: None,
            last_seen: None,
        }
    }
}

/// A directed screen transition.
///
/// At most one edge exists per ordered `(from, to)` pair; the reverse edge is
/// a distinct edge and together they form a bidirectional pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEdge {
    /// Source screen id.
    pub from: String,
    /// Target screen id.
    pub to: String,
    /// Raw transition tally.
    #[serde(default)]
    pub count: u32,
    /// Average number of log events observed between the two screens per
    /// traversal. Absent when the backend did not compute it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_events: Option<f64>,
    /// Number of distinct sessions containing this transition.
    #[serde(default)]
    pub session_count: u32,
    /// Transition count divided by total sessions, in [0, 1].
    #[serde(default)]
    pub frequency: f64,
    /// Backend-supplied significance weighting, independent of raw count.
    #[serde(default)]
    pub strength: f64,
}

impl NavEdge {
    /// Weight shown on the rendered edge.
    ///
    /// Prefers the rounded average per-session event count over the raw
    /// transition tally when a finite average is available, floored at 0.
    pub fn display_count(&self) -> u32 {
        match self.avg_events {
            Some(avg) if avg.is_finite() => avg.round().max(0.0) as u32,
            _ => self.count,
        }
    }
}

/// Aggregate facts about a derived navigation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// Sessions that contributed to the graph.
    pub total_sessions: u32,
    /// Distinct screens observed.
    pub total_screens: u32,
    /// Distinct ordered transitions observed.
    pub total_transitions: u32,
    /// Whether any bidirectional pair (A→B and B→A) exists.
    pub has_loops: bool,
}

/// Canonical navigation graph: the normalized form every consumer works with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavGraph {
    /// Screens.
    #[serde(default)]
    pub nodes: Vec<NavNode>,
    /// Directed transitions.
    #[serde(default)]
    pub edges: Vec<NavEdge>,
    /// Designated layout root, when the payload named one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Aggregate facts, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<GraphMetadata>,
}

/// One parent→child row of a dependency-tree payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRelation {
    /// Source screen.
    pub parent: String,
    /// Target screen.
    pub child: String,
    /// Transition tally; defaults to 1 when the backend omits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Average events per traversal; defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_events: Option<f64>,
    /// Distinct sessions; defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_count: Option<u32>,
    /// Transition frequency; defaults to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Significance weighting; defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
}

/// Dependency-tree wire shape: a named root plus relationship rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyTreeData {
    /// Designated root screen.
    pub root: String,
    /// Parent/child relationship rows.
    #[serde(default)]
    pub nodes: Vec<ScreenRelation>,
}

/// Either wire shape the graph service may answer with.
///
/// Shape detection follows the payload structure: a defined `root` whose
/// `nodes` rows carry `parent`/`child` keys selects the dependency-tree form;
/// anything else is treated as a direct graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlowchartPayload {
    /// `{root, nodes: [{parent, child, ...}]}`.
    DependencyTree(DependencyTreeData),
    /// `{nodes: [{id, label, ...}], edges: [...]}`.
    Graph(NavGraph),
}
