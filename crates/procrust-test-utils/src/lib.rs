//! Shared fixtures for Procrustean filter tests.
//!
//! The fixture family is a ten-state filter with a single initial
//! state `w0` fanning out to four branches that converge on the sink
//! `w9`. The variants differ in one relabeled or retargeted edge each,
//! which is enough to move the compatibility graph's edge count in a
//! known way and to break determinism.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use procrust_core::{Filter, FilterBuilder};

/// Builder for the shared ten-state skeleton: states, initial state,
/// alphabets, and output labeling. Variants add their own edges.
fn ten_state_skeleton() -> FilterBuilder {
    FilterBuilder::new()
        .states(["w0", "w1", "w2", "w3", "w4", "w5", "w6", "w7", "w8", "w9"])
        .initial(["w0"])
        .observations(["a", "b", "c", "e", "f", "g", "h", "o", "p", "q", "r"])
        .outputs(["o1", "o2", "o3", "o4", "o5"])
        .label("w0", ["o4"])
        .label("w1", ["o1"])
        .label("w2", ["o1"])
        .label("w3", ["o1"])
        .label("w4", ["o1"])
        .label("w5", ["o2"])
        .label("w6", ["o2"])
        .label("w7", ["o3"])
        .label("w8", ["o3"])
        .label("w9", ["o5"])
}

/// Edges shared by every variant (everything except `w4`'s branch
/// edge to `w6` and `w8`'s return edge, which the variants vary).
fn common_edges(builder: FilterBuilder) -> FilterBuilder {
    builder
        .edge("w0", "w1", ["o"])
        .edge("w0", "w2", ["p"])
        .edge("w0", "w3", ["q"])
        .edge("w0", "w4", ["r"])
        .edge("w1", "w5", ["e"])
        .edge("w1", "w9", ["b"])
        .edge("w2", "w2", ["b"])
        .edge("w2", "w8", ["f"])
        .edge("w2", "w9", ["a"])
        .edge("w3", "w3", ["c"])
        .edge("w3", "w7", ["f"])
        .edge("w4", "w4", ["a"])
        .edge("w4", "w9", ["c"])
        .edge("w5", "w9", ["g"])
        .edge("w6", "w4", ["g"])
        .edge("w7", "w9", ["h"])
}

/// The base ten-state fixture. Deterministic; its compatibility graph
/// has exactly two edges: `{w1, w3}` and `{w1, w4}`.
pub fn ten_state_filter() -> Filter {
    common_edges(ten_state_skeleton())
        .edge("w4", "w6", ["g"])
        .edge("w8", "w2", ["h"])
        .build()
        .expect("fixture is consistent")
}

/// Variant with `w4 -> w6` relabeled from `g` to `e`. The label now
/// collides with `w1 -> w5` on `e`, and since `{w5, w6}` is
/// incompatible the pair `{w1, w4}` falls out too: exactly one
/// compatibility edge, `{w1, w3}`.
pub fn ten_state_filter_relabeled() -> Filter {
    common_edges(ten_state_skeleton())
        .edge("w4", "w6", ["e"])
        .edge("w8", "w2", ["h"])
        .build()
        .expect("fixture is consistent")
}

/// Variant with `w8`'s return edge retargeted to the sink
/// (`w8 -> w9` on `h`, matching `w7 -> w9` on `h`). That makes
/// `{w7, w8}` compatible and transitively `{w2, w3}` as well:
/// exactly four compatibility edges.
pub fn ten_state_filter_shared_sink() -> Filter {
    common_edges(ten_state_skeleton())
        .edge("w4", "w6", ["g"])
        .edge("w8", "w9", ["h"])
        .build()
        .expect("fixture is consistent")
}

/// Nondeterministic variant: `w1` carries `e` on edges to both `w5`
/// and `w6`. Everything else matches the base fixture.
pub fn ten_state_filter_nondeterministic() -> Filter {
    common_edges(ten_state_skeleton())
        .edge("w4", "w6", ["g"])
        .edge("w8", "w2", ["h"])
        .edge("w1", "w6", ["e"])
        .build()
        .expect("fixture is consistent")
}

/// A three-state chain where every state has a distinct output, so no
/// state pair is even output-compatible.
pub fn distinct_outputs_chain() -> Filter {
    FilterBuilder::new()
        .states(["s0", "s1", "s2"])
        .initial(["s0"])
        .observations(["a"])
        .outputs(["x", "y", "z"])
        .edge("s0", "s1", ["a"])
        .edge("s1", "s2", ["a"])
        .label("s0", ["x"])
        .label("s1", ["y"])
        .label("s2", ["z"])
        .build()
        .expect("fixture is consistent")
}
