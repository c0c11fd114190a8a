//! Dense, strongly-typed indices into a filter's declared sets.

use std::fmt;

/// Index of a state within a filter's state set.
///
/// Assigned in declaration order by [`FilterBuilder::build`]
/// (`StateIdx(n)` is the n-th declared state). Indices are only
/// meaningful relative to the filter that produced them.
///
/// [`FilterBuilder::build`]: crate::FilterBuilder::build
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateIdx(pub u32);

impl fmt::Display for StateIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StateIdx {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Index of an observation symbol within a filter's alphabet `Y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObsIdx(pub u32);

impl fmt::Display for ObsIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ObsIdx {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Index of an output symbol within a filter's output alphabet `O`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutIdx(pub u32);

impl fmt::Display for OutIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for OutIdx {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
