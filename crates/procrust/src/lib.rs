//! Procrustean filters: observation-processing automata for robotic
//! sensing, as introduced by Zhang and Shell's WAFR 2020 paper "Cover
//! Combinatorial Filters and their Minimization Problem".
//!
//! This is the facade crate re-exporting the public API of the
//! sub-crates. For most users a single `procrust` dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use procrust::prelude::*;
//! use std::sync::Arc;
//!
//! // A two-bit sensor: which of two beams is broken.
//! let filter = Arc::new(
//!     FilterBuilder::new()
//!         .states(["idle", "near", "far"])
//!         .initial(["idle"])
//!         .observations(["n", "f"])
//!         .outputs(["clear", "blocked"])
//!         .edge("idle", "near", ["n"])
//!         .edge("idle", "far", ["f"])
//!         .edge("near", "idle", ["n"])
//!         .edge("far", "idle", ["f"])
//!         .label("idle", ["clear"])
//!         .label("near", ["blocked"])
//!         .label("far", ["blocked"])
//!         .build()
//!         .unwrap(),
//! );
//!
//! assert!(filter.is_deterministic());
//!
//! // Run a query from the initial state.
//! let reached = filter.reaches(&[Obs::from("n"), Obs::from("n")]);
//! assert_eq!(reached.len(), 1);
//!
//! // "near" and "far" agree on outputs and never collide on labels,
//! // so a minimizer may merge them.
//! let graph = CompatibilityGraph::build(&filter);
//! assert_eq!(graph.edge_count(), 1);
//!
//! // Explore one-step sequence extensions.
//! let frontier = ExtensionCandidate::empty(Arc::clone(&filter)).extend_by_one();
//! assert_eq!(frontier.len(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `procrust-core` | Symbols, alphabets, `Filter`, run engine, determinism |
//! | [`compat`] | `procrust-compat` | Compatibility graph for minimizers |
//! | [`extend`] | `procrust-extend` | Extension candidate algebra |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Filter data model, run engine, and determinism check
/// (`procrust-core`).
pub use procrust_core as model;

/// Compatibility graph construction (`procrust-compat`).
pub use procrust_compat as compat;

/// Extension candidate algebra (`procrust-extend`).
pub use procrust_extend as extend;

/// Everything most callers need, in one import.
pub mod prelude {
    pub use procrust_compat::{compatibility_graph, CompatibilityGraph};
    pub use procrust_core::{
        Alphabet, ConstructionError, Filter, FilterBuilder, Obs, ObsIdx, Out, OutIdx, State,
        StateIdx, StateSet, Transition,
    };
    pub use procrust_extend::{CandidateSet, ExtensionCandidate, InvalidObservationError};
}
