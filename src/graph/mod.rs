//! Navigation graph construction.
//!
//! Two producers feed the canonical [`NavGraph`]: normalization of a graph
//! service payload (either wire shape), and local derivation from raw logs by
//! scanning `NAVIGATE-TO` markers per session. Both are pure and rebuilt from
//! scratch whenever the underlying log set or selected session changes.

use crate::model::{
    DependencyTreeData, FlowchartPayload, GraphMetadata, LogLine, NavEdge, NavGraph, NavNode,
};
use crate::parser;
use std::collections::{HashMap, HashSet};

/// Normalize a service payload into the canonical graph shape.
pub fn normalize_payload(payload: FlowchartPayload) -> NavGraph {
    match payload {
        FlowchartPayload::Graph(graph) => graph,
        FlowchartPayload::DependencyTree(tree) => transform_dependency_tree(&tree),
    }
}

/// Convert a dependency-tree payload (`root` + parent/child rows) into nodes
/// and edges.
///
/// The node set is the union of the root and every parent and child, in first
/// appearance order, each labeled with its own id. Missing edge metrics
/// default to `count=1, avg_events=0, session_count=0, frequency=0,
/// strength=1`.
pub fn transform_dependency_tree(tree: &DependencyTreeData) -> NavGraph {
    if tree.nodes.is_empty() {
        return NavGraph::default();
    }

    let mut seen = HashSet::new();
    let mut nodes = Vec::new();
    let mut push_node = |id: &str, seen: &mut HashSet<String>, nodes: &mut Vec<NavNode>| {
        if seen.insert(id.to_string()) {
            nodes.push(NavNode::bare(id));
        }
    };

    push_node(&tree.root, &mut seen, &mut nodes);
    for rel in &tree.nodes {
        push_node(&rel.parent, &mut seen, &mut nodes);
        push_node(&rel.child, &mut seen, &mut nodes);
    }

    let edges = tree
        .nodes
        .iter()
        .map(|rel| NavEdge {
            from: rel.parent.clone(),
            to: rel.child.clone(),
            count: rel.count.unwrap_or(1),
            avg_events: Some(rel.avg_events.unwrap_or(0.0)),
            session_count: rel.session_count.unwrap_or(0),
            frequency: rel.frequency.unwrap_or(0.0),
            strength: rel.strength.unwrap_or(1.0),
        })
        .collect();

    NavGraph {
        nodes,
        edges,
        root: Some(tree.root.clone()),
        metadata: None,
    }
}

/// Ordered pairs that participate in a bidirectional pair.
///
/// An edge `(from, to)` is in the result iff the reverse edge `(to, from)`
/// also exists. This is a structural property of the graph: it selects the
/// offset curve formula during layout.
pub fn bidirectional_pairs(edges: &[NavEdge]) -> HashSet<(String, String)> {
    let keys: HashSet<(&str, &str)> = edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    edges
        .iter()
        .filter(|e| keys.contains(&(e.to.as_str(), e.from.as_str())))
        .map(|e| (e.from.clone(), e.to.clone()))
        .collect()
}

/// Whether any bidirectional pair exists.
pub fn has_loops(edges: &[NavEdge]) -> bool {
    let keys: HashSet<(&str, &str)> = edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    edges
        .iter()
        .any(|e| keys.contains(&(e.to.as_str(), e.from.as_str())))
}

#[derive(Debug, Default)]
struct ScreenStat {
    count: u32,
    sessions: HashSet<u32>,
    first_seen: Option<String>,
    last_seen: Option<String>,
}

#[derive(Debug, Default)]
struct TransitionStat {
    count: u32,
    sessions: HashSet<u32>,
    total_events: u64,
    event_counts: Vec<u64>,
}

/// Derive a navigation graph from raw logs by scanning navigation markers.
///
/// Per session, consecutive `NAVIGATE-TO` screens form a transition;
/// `avg_events` is the mean number of log lines strictly between the two
/// markers. Node metrics (visit count, session coverage, first/last seen)
/// come from every marker occurrence. Nodes are emitted in sorted id order,
/// edges in first-observation order.
pub fn build_graph_from_logs(logs: &[LogLine]) -> NavGraph {
    if logs.is_empty() {
        return NavGraph::default();
    }

    // Screen metadata over the whole log set.
    let mut screen_order: Vec<String> = Vec::new();
    let mut screens: HashMap<String, ScreenStat> = HashMap::new();
    for log in logs {
        let Some(screen) = parser::capture_screen(&log.message) else {
            continue;
        };
        let time = log.effective_time();
        let stat = screens.entry(screen.to_string()).or_insert_with(|| {
            screen_order.push(screen.to_string());
            ScreenStat {
                first_seen: time.clone(),
                ..ScreenStat::default()
            }
        });
        stat.count += 1;
        stat.sessions.insert(log.session_id.unwrap_or(0));
        stat.last_seen = time;
    }

    // Group lines per session, keeping first-appearance order.
    let mut session_order: Vec<u32> = Vec::new();
    let mut session_logs: HashMap<u32, Vec<&LogLine>> = HashMap::new();
    for log in logs {
        let sid = log.session_id.unwrap_or(0);
        session_logs.entry(sid).or_insert_with(|| {
            session_order.push(sid);
            Vec::new()
        });
        if let Some(bucket) = session_logs.get_mut(&sid) {
            bucket.push(log);
        }
    }
    let total_sessions = session_order.len();

    // Transition matrix over consecutive screens within each session.
    let mut transition_order: Vec<(String, String)> = Vec::new();
    let mut transitions: HashMap<(String, String), TransitionStat> = HashMap::new();
    for sid in &session_order {
        let lines = &session_logs[sid];
        let sequence: Vec<&str> = lines
            .iter()
            .filter_map(|log| parser::capture_screen(&log.message))
            .collect();
        for pair in sequence.windows(2) {
            let key = (pair[0].to_string(), pair[1].to_string());
            let events = events_between(lines, pair[0], pair[1]);
            let stat = transitions.entry(key.clone()).or_insert_with(|| {
                transition_order.push(key);
                TransitionStat::default()
            });
            stat.count += 1;
            stat.sessions.insert(*sid);
            stat.total_events += events;
            stat.event_counts.push(events);
        }
    }

    let mut screen_ids: Vec<&String> = screen_order.iter().collect();
    screen_ids.sort();
    let nodes: Vec<NavNode> = screen_ids
        .iter()
        .map(|id| {
            let stat = &screens[*id];
            NavNode {
                id: (*id).clone(),
                label: readable_label(id),
                count: Some(stat.count),
                session_count: Some(stat.sessions.len() as u32),
                frequency: Some(if total_sessions > 0 {
                    stat.sessions.len() as f64 / total_sessions as f64
                } else {
                    0.0
                }),
                first_seen: stat.first_seen.clone(),
                last_seen: stat.last_seen.clone(),
            }
        })
        .collect();

    let edges: Vec<NavEdge> = transition_order
        .iter()
        .map(|key| {
            let stat = &transitions[key];
            let avg = if stat.count > 0 {
                stat.total_events as f64 / stat.count as f64
            } else {
                0.0
            };
            let frequency = if total_sessions > 0 {
                stat.count as f64 / total_sessions as f64
            } else {
                0.0
            };
            NavEdge {
                from: key.0.clone(),
                to: key.1.clone(),
                count: stat.count,
                avg_events: Some(round_to(avg, 1)),
                session_count: stat.sessions.len() as u32,
                frequency: round_to(frequency, 2),
                strength: transition_strength(frequency, &stat.event_counts),
            }
        })
        .collect();

    let metadata = GraphMetadata {
        total_sessions: total_sessions as u32,
        total_screens: screens.len() as u32,
        total_transitions: transitions.len() as u32,
        has_loops: has_loops(&edges),
    };

    NavGraph {
        nodes,
        edges,
        root: None,
        metadata: Some(metadata),
    }
}

/// Count log lines strictly between the first `from` marker and the next
/// `to` marker in a session's lines. 0 when either marker is missing.
fn events_between(lines: &[&LogLine], from: &str, to: &str) -> u64 {
    let mut start: Option<usize> = None;
    for (i, log) in lines.iter().enumerate() {
        let Some(screen) = parser::capture_screen(&log.message) else {
            continue;
        };
        match start {
            None if screen == from => start = Some(i),
            Some(s) if screen == to => return (i - s - 1) as u64,
            _ => {}
        }
    }
    0
}

/// Edge significance on a 0-10 scale: frequency contributes up to 10, plus a
/// consistency bonus of `1 - spread/max` over the per-session event counts
/// (1 when there is no spread to measure).
fn transition_strength(frequency: f64, event_counts: &[u64]) -> f64 {
    let frequency_score = frequency * 10.0;
    let consistency = match (event_counts.iter().max(), event_counts.iter().min()) {
        (Some(&max), Some(&min)) if max > 0 => 1.0 - (max - min) as f64 / max as f64,
        _ => 1.0,
    };
    round_to(frequency_score + consistency, 1).min(10.0)
}

/// Readable label: a space before each uppercase character, trimmed.
fn readable_label(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 4);
    for ch in id.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
