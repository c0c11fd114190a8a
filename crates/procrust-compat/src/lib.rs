//! Compatibility graph construction for Procrustean filters.
//!
//! Two states are *compatible* when merging them cannot be falsified
//! by the filter's own structure: their output labels agree somewhere,
//! and no common observation drives them into a pair already known to
//! be incompatible. The resulting undirected graph over states is the
//! combinatorial object a minimization/covering solver searches — this
//! crate only builds it, it does not solve anything on it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod graph;
mod refine;

pub use graph::{compatibility_graph, CompatibilityGraph};
