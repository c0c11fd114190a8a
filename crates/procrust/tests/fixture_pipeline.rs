//! End-to-end scenario over the ten-state fixture: construction, run
//! queries, determinism, compatibility graph, and a breadth-first
//! sweep of extension candidates, exercised together through the
//! facade.

use procrust::prelude::*;
use procrust_test_utils::{ten_state_filter, ten_state_filter_nondeterministic};
use std::sync::Arc;

fn idx(filter: &Filter, name: &str) -> StateIdx {
    filter.state_index(&State::from(name)).unwrap()
}

#[test]
fn fixture_builds_with_ten_states() {
    let filter = ten_state_filter();
    assert_eq!(filter.state_count(), 10);
    assert_eq!(filter.alphabet().len(), 11);
    assert_eq!(filter.outputs().len(), 5);
    assert!(filter.initial().contains(idx(&filter, "w0")));
}

#[test]
fn run_determinism_and_compatibility_agree_on_the_fixture() {
    let filter = ten_state_filter();

    // w0 -o-> w1 -e-> w5 -g-> w9.
    let reached = filter.reaches(&[Obs::from("o"), Obs::from("e"), Obs::from("g")]);
    assert_eq!(reached.len(), 1);
    assert!(reached.contains(idx(&filter, "w9")));

    assert!(filter.is_deterministic());
    assert!(!ten_state_filter_nondeterministic().is_deterministic());

    let graph = CompatibilityGraph::build(&filter);
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn frontier_exploration_finds_exactly_the_traceable_prefixes() {
    let filter = Arc::new(ten_state_filter());
    let w0 = idx(&filter, "w0");

    // Depth-one frontier: one candidate per alphabet symbol, of
    // which exactly four (o, p, q, r) are traceable from w0.
    let frontier = ExtensionCandidate::empty(Arc::clone(&filter)).extend_by_one();
    assert_eq!(frontier.len(), filter.alphabet().len());

    let traceable: CandidateSet = frontier
        .iter()
        .filter(|c| c.is_extension_of(w0))
        .cloned()
        .collect();
    assert_eq!(traceable.len(), 4);

    // Depth-two frontier from the traceable prefixes, deduplicated.
    let mut depth_two = CandidateSet::new();
    for parent in traceable.iter() {
        for child in parent.extend_by_one() {
            if child.is_extension_of(w0) {
                depth_two.push_unique(child);
            }
        }
    }
    // w1: e,b; w2: b,f,a; w3: c,f; w4: a,g,c — ten two-step
    // sequences in total, all distinct.
    assert_eq!(depth_two.len(), 10);

    // Set algebra over frontiers behaves like sets.
    let union = CandidateSet::union_of(&traceable, &[&depth_two]);
    assert_eq!(union.len(), 14);
    let overlap = CandidateSet::intersection_of(&union, &[&depth_two]);
    assert!(overlap.same_members(&depth_two));
}
