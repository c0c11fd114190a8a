//! The compatibility graph value handed to a minimizer.

use crate::refine;
use indexmap::IndexSet;
use procrust_core::{Filter, StateIdx};

/// An undirected graph over a filter's states whose edges mark state
/// pairs that may be merged without locally violating the filter's
/// semantics.
///
/// The graph is a snapshot: it holds no reference back to the filter
/// it was built from, and building it never mutates the filter. The
/// vertex set is all of `V`, including unreachable states; pruning is
/// left to the consumer.
///
/// # Examples
///
/// ```
/// use procrust_core::FilterBuilder;
/// use procrust_compat::CompatibilityGraph;
///
/// // Two sibling states with the same output and no outgoing edges
/// // are trivially mergeable.
/// let filter = FilterBuilder::new()
///     .states(["s0", "s1", "s2"])
///     .initial(["s0"])
///     .observations(["a", "b"])
///     .outputs(["x", "y"])
///     .edge("s0", "s1", ["a"])
///     .edge("s0", "s2", ["b"])
///     .label("s0", ["x"])
///     .label("s1", ["y"])
///     .label("s2", ["y"])
///     .build()
///     .unwrap();
///
/// let graph = CompatibilityGraph::build(&filter);
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// let s1 = filter.state_index(&"s1".into()).unwrap();
/// let s2 = filter.state_index(&"s2".into()).unwrap();
/// assert!(graph.contains_edge(s1, s2));
/// ```
#[derive(Clone, Debug)]
pub struct CompatibilityGraph {
    vertices: Vec<StateIdx>,
    edges: IndexSet<(StateIdx, StateIdx)>,
}

impl CompatibilityGraph {
    /// Build the compatibility graph of `filter`.
    ///
    /// Seeds with every pair of distinct states whose output label
    /// sets intersect, then removes pairs whose shared observations
    /// lead to an incompatible target pair, repeating to a fixed
    /// point. The refinement only removes edges, so adding a
    /// compatible pair to a filter never loses existing edges.
    pub fn build(filter: &Filter) -> Self {
        let mut edges = refine::seed_pairs(filter);
        refine::refine_to_fixed_point(filter, &mut edges);
        let vertices = (0..filter.state_count() as u32).map(StateIdx).collect();
        Self { vertices, edges }
    }

    /// The vertex set, in state declaration order.
    pub fn vertices(&self) -> &[StateIdx] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of compatibility edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate edges as normalized `(min, max)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (StateIdx, StateIdx)> + '_ {
        self.edges.iter().copied()
    }

    /// Whether `u` and `v` are compatible. Order-insensitive; a state
    /// is never listed as compatible with itself.
    pub fn contains_edge(&self, u: StateIdx, v: StateIdx) -> bool {
        self.edges.contains(&refine::pair(u, v))
    }

    /// All states compatible with `u`.
    pub fn neighbours(&self, u: StateIdx) -> Vec<StateIdx> {
        self.edges
            .iter()
            .filter_map(|&(a, b)| {
                if a == u {
                    Some(b)
                } else if b == u {
                    Some(a)
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Convenience free function mirroring the builder-method form.
pub fn compatibility_graph(filter: &Filter) -> CompatibilityGraph {
    CompatibilityGraph::build(filter)
}
