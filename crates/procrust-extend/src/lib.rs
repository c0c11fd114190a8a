//! Extension candidate algebra over Procrustean filters.
//!
//! An *extension candidate* is a tentative observation sequence bound
//! to a filter, used by synthesis searches to explore the space of
//! sequences consistent with that filter. This crate provides the
//! candidate value with validity checking and one-step extension, and
//! insertion-ordered candidate sets with union/intersection keyed by
//! sequence equality.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod set;

pub use candidate::ExtensionCandidate;
pub use error::InvalidObservationError;
pub use set::CandidateSet;
