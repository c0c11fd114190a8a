//! Core data model for Procrustean filters.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the symbol and index types, the alphabet registry, reached-state
//! sets, the immutable [`Filter`] with its validating builder, the
//! run engine, and the structural determinism check.
//!
//! A Procrustean filter (Zhang & Shell, WAFR 2020, "Cover Combinatorial
//! Filters and their Minimization Problem") is a finite transition
//! system over an observation alphabet whose states carry output
//! labels. This crate only models and queries filters; the
//! compatibility graph and extension-sequence algebra that minimizers
//! and synthesis searches consume live in their own crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod error;
pub mod filter;
pub mod id;
pub mod run;
pub mod state_set;
pub mod symbol;

pub use alphabet::Alphabet;
pub use error::ConstructionError;
pub use filter::{Filter, FilterBuilder, Transition};
pub use id::{ObsIdx, OutIdx, StateIdx};
pub use state_set::StateSet;
pub use symbol::{Obs, Out, State};
