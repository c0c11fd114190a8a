//! Construction-time validation errors.

use crate::symbol::{Obs, Out, State};
use std::error::Error;
use std::fmt;

/// Why [`FilterBuilder::build`](crate::FilterBuilder::build) rejected
/// its input.
///
/// Every variant names the offending symbol. Construction either
/// succeeds completely or fails with the first violation found; a
/// built [`Filter`](crate::Filter) can never contain a dangling
/// reference, so none of these can arise after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConstructionError {
    /// The declared state set `V` is empty.
    NoStates,
    /// A state was referenced that is not in `V`.
    UnknownState {
        /// The undeclared state.
        state: State,
        /// Where the reference appeared (initial set, transition
        /// source/target, or output labeling).
        context: &'static str,
    },
    /// A transition is labeled with an observation not in `Y`.
    UnknownObservation {
        /// The undeclared observation.
        obs: Obs,
        /// Source state of the offending transition.
        source: State,
        /// Target state of the offending transition.
        target: State,
    },
    /// A transition was declared with an empty observation label set.
    /// An edge exists iff at least one observation labels it, so an
    /// unlabeled edge is a contradiction rather than a no-op.
    UnlabeledEdge {
        /// Source state of the offending transition.
        source: State,
        /// Target state of the offending transition.
        target: State,
    },
    /// A state is labeled with an output not in `O`.
    UnknownOutput {
        /// The undeclared output.
        out: Out,
        /// The state carrying the label.
        state: State,
    },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStates => write!(f, "filter has no states"),
            Self::UnknownState { state, context } => {
                write!(f, "state '{state}' in {context} is not in the state set")
            }
            Self::UnknownObservation {
                obs,
                source,
                target,
            } => write!(
                f,
                "observation '{obs}' on transition {source} -> {target} is not in the alphabet"
            ),
            Self::UnlabeledEdge { source, target } => {
                write!(f, "transition {source} -> {target} has no observation labels")
            }
            Self::UnknownOutput { out, state } => {
                write!(f, "output '{out}' on state '{state}' is not in the output alphabet")
            }
        }
    }
}

impl Error for ConstructionError {}
