//! End-to-end scenarios across the whole analysis pipeline: raw lines into
//! sessions, statistics, graph, and layout.

use crate::graph;
use crate::layout::{self, LayoutDirection};
use crate::model::{FlowchartPayload, LogLine};
use crate::service::{FlowchartService, LocalLogStore};
use crate::state::AnalysisState;
use crate::stats;

fn line(message: &str) -> LogLine {
    LogLine::new("dev-1", message)
}

fn two_session_logs() -> Vec<LogLine> {
    vec![
        line("04:33:11:676 LOG-APP App Version 1.0"),
        line("04:33:12:000 NAVIGATE-TO: {screen: Home}"),
        line("04:33:15:500 ERROR something failed"),
        line("04:34:00:000 LOG-APP App Version 1.0"),
        line("04:34:01:000 NAVIGATE-TO: {screen: Settings}"),
    ]
}

#[test]
fn two_session_log_set_reconstructs_and_counts() {
    let store = LocalLogStore::new(two_session_logs());
    let mut state = AnalysisState::default();
    state.initialize(&store, store.logs());

    let sessions = state.sessions();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].screens, vec!["Home"]);
    assert_eq!(sessions[0].entries_count, 3);
    assert_eq!(sessions[1].screens, vec!["Settings"]);
    assert_eq!(sessions[1].entries_count, 2);

    // Across the whole log set, exactly one crash.
    let statistics = stats::compute_statistics(store.logs(), sessions, None, None);
    assert_eq!(statistics.total_crashes, 1);
    assert_eq!(statistics.total_events, 5);

    // Scoped to the selected session 1, the crash is still visible.
    assert_eq!(state.statistics().total_crashes, 1);
    assert_eq!(state.statistics().total_events, 3);
}

#[test]
fn dependency_tree_payload_flows_to_leveled_layout() {
    let json = r#"{
        "root": "home",
        "nodes": [
            {"parent": "home", "child": "siteList"},
            {"parent": "siteList", "child": "siteDetail"},
            {"parent": "home", "child": "settings"}
        ]
    }"#;
    let payload: FlowchartPayload = serde_json::from_str(json).expect("payload");
    let nav = graph::normalize_payload(payload);
    assert_eq!(nav.root.as_deref(), Some("home"));
    assert_eq!(nav.nodes.len(), 4);
    assert_eq!(nav.edges.len(), 3);

    let tree = layout::build_tree_structure(&nav.nodes, &nav.edges, nav.root.as_deref());
    let levels = layout::assign_levels(&tree);
    assert_eq!(levels[0], vec!["home"]);
    // Levels strictly increase along the acyclic path home -> siteList ->
    // siteDetail.
    assert!(levels[1].contains(&"siteList".to_string()));
    assert!(levels[2].contains(&"siteDetail".to_string()));

    let computed = layout::compute_layout(&nav, LayoutDirection::TopBottom);
    assert_eq!(computed.positions.len(), 4);
    let home_y = computed.positions["home"].y;
    assert!(computed.positions.values().all(|r| r.y >= home_y));
}

#[test]
fn log_derived_graph_and_layout_are_deterministic() {
    let logs = vec![
        line("04:33:11:676 LOG-APP App Version 1.0"),
        line("04:33:12:000 NAVIGATE-TO: {screen: home}"),
        line("04:33:13:000 NAVIGATE-TO: {screen: siteList}"),
        line("04:33:14:000 NAVIGATE-TO: {screen: home}"),
        line("04:33:15:000 NAVIGATE-TO: {screen: settings}"),
    ];
    let store_a = LocalLogStore::new(logs.clone());
    let store_b = LocalLogStore::new(logs);

    let graph_a = graph::normalize_payload(store_a.fetch_graph(None).expect("graph"));
    let graph_b = graph::normalize_payload(store_b.fetch_graph(None).expect("graph"));
    assert_eq!(graph_a, graph_b);

    let layout_a = layout::compute_layout(&graph_a, LayoutDirection::TopBottom);
    let layout_b = layout::compute_layout(&graph_b, LayoutDirection::TopBottom);
    assert_eq!(layout_a, layout_b);
}

#[test]
fn return_transitions_form_offset_bidirectional_pair() {
    let logs = vec![
        line("04:33:11:676 LOG-APP App Version 1.0"),
        line("04:33:12:000 NAVIGATE-TO: {screen: home}"),
        line("04:33:13:000 NAVIGATE-TO: {screen: siteList}"),
        line("04:33:14:000 NAVIGATE-TO: {screen: home}"),
    ];
    let store = LocalLogStore::new(logs);
    let nav = graph::normalize_payload(store.fetch_graph(None).expect("graph"));
    assert_eq!(nav.edges.len(), 2);
    assert!(nav.metadata.as_ref().is_some_and(|m| m.has_loops));

    let computed = layout::compute_layout(&nav, LayoutDirection::TopBottom);
    assert!(computed.edge_paths.iter().all(|p| p.has_reverse_edge));
}

#[test]
fn empty_input_resolves_to_empty_but_valid_state() {
    let store = LocalLogStore::new(Vec::new());
    let mut state = AnalysisState::default();
    state.initialize(&store, store.logs());

    assert!(state.sessions().is_empty());
    assert_eq!(state.selected_session(), None);
    assert!(state.graph().nodes.is_empty());
    assert_eq!(
        state.layout().expect("layout").view_box,
        "0 0 2000 1200"
    );
    let statistics = state.statistics();
    assert_eq!(statistics.total_events, 0);
    assert_eq!(statistics.average_session_duration, "0s");
}

#[test]
fn search_narrows_the_visible_log_window() {
    let store = LocalLogStore::new(two_session_logs());
    let mut state = AnalysisState::default();
    state.initialize(&store, store.logs());

    state.cursor_mut().set_search("error");
    let visible = state.cursor().visible();
    assert_eq!(visible.len(), 1);
    assert!(visible[0].message.contains("ERROR"));

    state.cursor_mut().set_search("no such text");
    assert!(state.cursor().visible().is_empty());
}
