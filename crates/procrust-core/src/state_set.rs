//! Sets of state indices, as produced by run queries.

use crate::id::StateIdx;
use smallvec::SmallVec;

/// A set of states of one filter.
///
/// This is the value the run engine returns: the set of states
/// reachable after consuming an observation sequence. Stored sorted
/// and deduplicated in a `SmallVec`, so sets up to 8 states stay
/// inline and membership is a binary search.
///
/// # Examples
///
/// ```
/// use procrust_core::{StateIdx, StateSet};
///
/// let mut set = StateSet::new();
/// assert!(set.insert(StateIdx(3)));
/// assert!(set.insert(StateIdx(1)));
/// assert!(!set.insert(StateIdx(3)));
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(StateIdx(1)));
/// let ordered: Vec<StateIdx> = set.iter().collect();
/// assert_eq!(ordered, [StateIdx(1), StateIdx(3)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateSet {
    items: SmallVec<[StateIdx; 8]>,
}

impl StateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a one-element set.
    pub fn singleton(state: StateIdx) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Insert a state. Returns `false` if it was already present.
    pub fn insert(&mut self, state: StateIdx) -> bool {
        match self.items.binary_search(&state) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, state);
                true
            }
        }
    }

    /// Membership test.
    pub fn contains(&self, state: StateIdx) -> bool {
        self.items.binary_search(&state).is_ok()
    }

    /// Number of states in the set.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate states in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = StateIdx> + '_ {
        self.items.iter().copied()
    }

    /// Insert every state of `other` into `self`.
    pub fn union_with(&mut self, other: &StateSet) {
        for state in other.iter() {
            self.insert(state);
        }
    }
}

impl FromIterator<StateIdx> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateIdx>>(iter: I) -> Self {
        let mut set = Self::new();
        for state in iter {
            set.insert(state);
        }
        set
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = StateIdx;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, StateIdx>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: u32) -> StateIdx {
        StateIdx(v)
    }

    #[test]
    fn insert_keeps_sorted_unique() {
        let set: StateSet = [s(5), s(1), s(5), s(3)].into_iter().collect();
        let items: Vec<StateIdx> = set.iter().collect();
        assert_eq!(items, [s(1), s(3), s(5)]);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: StateSet = [s(2), s(7)].into_iter().collect();
        let b: StateSet = [s(7), s(2)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn union_with_merges() {
        let mut a: StateSet = [s(1), s(2)].into_iter().collect();
        let b: StateSet = [s(2), s(4)].into_iter().collect();
        a.union_with(&b);
        assert_eq!(a.len(), 3);
        assert!(a.contains(s(4)));
    }
}
