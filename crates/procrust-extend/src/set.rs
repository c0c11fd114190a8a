//! Insertion-ordered candidate sets with union and intersection.

use crate::candidate::ExtensionCandidate;

/// A set of extension candidates, deduplicated by sequence equality,
/// iterated in first-insertion order.
///
/// Order is preserved because synthesis searches treat these as work
/// queues as well as sets, but it carries no semantic weight — two
/// sets with the same members in different orders denote the same
/// set of sequences.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    items: Vec<ExtensionCandidate>,
}

impl CandidateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `candidate` unless an equal one is already present.
    /// Returns `true` if it was inserted.
    pub fn push_unique(&mut self, candidate: ExtensionCandidate) -> bool {
        if self.contains(&candidate) {
            return false;
        }
        self.items.push(candidate);
        true
    }

    /// Membership test keyed by sequence equality.
    pub fn contains(&self, candidate: &ExtensionCandidate) -> bool {
        self.position(candidate).is_some()
    }

    /// Position of the candidate equal to `candidate`, if any.
    pub fn position(&self, candidate: &ExtensionCandidate) -> Option<usize> {
        self.items.iter().position(|c| c == candidate)
    }

    /// The candidate at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<&ExtensionCandidate> {
        self.items.get(index)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtensionCandidate> {
        self.items.iter()
    }

    /// Union of `first` and every set in `rest`, deduplicated, in
    /// first-occurrence order. With an empty `rest` this is `first`
    /// unchanged.
    pub fn union_of(first: &CandidateSet, rest: &[&CandidateSet]) -> CandidateSet {
        let mut result = first.clone();
        for set in rest {
            for candidate in set.iter() {
                result.push_unique(candidate.clone());
            }
        }
        result
    }

    /// Intersection of `first` and every set in `rest`: the members
    /// of `first` present in all of `rest`, in `first`'s order. With
    /// an empty `rest` this is `first` unchanged.
    pub fn intersection_of(first: &CandidateSet, rest: &[&CandidateSet]) -> CandidateSet {
        if rest.is_empty() {
            return first.clone();
        }
        let mut result = CandidateSet::new();
        for candidate in first.iter() {
            if rest.iter().all(|set| set.contains(candidate)) {
                result.push_unique(candidate.clone());
            }
        }
        result
    }

    /// Whether `self` and `other` contain the same candidates,
    /// regardless of insertion order.
    pub fn same_members(&self, other: &CandidateSet) -> bool {
        self.len() == other.len() && self.iter().all(|c| other.contains(c))
    }
}

impl FromIterator<ExtensionCandidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = ExtensionCandidate>>(iter: I) -> Self {
        let mut set = Self::new();
        for candidate in iter {
            set.push_unique(candidate);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a ExtensionCandidate;
    type IntoIter = std::slice::Iter<'a, ExtensionCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procrust_core::{Filter, Obs};
    use procrust_test_utils::ten_state_filter;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn fixture() -> Arc<Filter> {
        Arc::new(ten_state_filter())
    }

    fn candidate(filter: &Arc<Filter>, seq: &[&str]) -> ExtensionCandidate {
        ExtensionCandidate::new(Arc::clone(filter), seq.iter().copied())
    }

    fn set(filter: &Arc<Filter>, seqs: &[&[&str]]) -> CandidateSet {
        seqs.iter().map(|s| candidate(filter, s)).collect()
    }

    // ── Basic set behavior ──────────────────────────────────────

    #[test]
    fn push_unique_rejects_duplicates() {
        let f = fixture();
        let mut s = CandidateSet::new();
        assert!(s.push_unique(candidate(&f, &["o"])));
        assert!(!s.push_unique(candidate(&f, &["o"])));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn position_finds_by_sequence() {
        let f = fixture();
        let s = set(&f, &[&["o"], &["p"], &["q"]]);
        assert_eq!(s.position(&candidate(&f, &["p"])), Some(1));
        assert_eq!(s.position(&candidate(&f, &["zzz"])), None);
    }

    #[test]
    fn from_iterator_deduplicates() {
        let f = fixture();
        let s = set(&f, &[&["o"], &["o"], &["p"]]);
        assert_eq!(s.len(), 2);
    }

    // ── Union / intersection ────────────────────────────────────

    #[test]
    fn union_with_no_extra_operands_is_identity() {
        let f = fixture();
        let s = set(&f, &[&["o"], &["p"]]);
        let u = CandidateSet::union_of(&s, &[]);
        assert!(u.same_members(&s));
    }

    #[test]
    fn union_merges_and_deduplicates() {
        let f = fixture();
        let a = set(&f, &[&["o"], &["p"]]);
        let b = set(&f, &[&["p"], &["q"]]);
        let u = CandidateSet::union_of(&a, &[&b]);
        assert_eq!(u.len(), 3);
        // First-occurrence order: a's members first.
        assert_eq!(u.get(0).unwrap().observations()[0], Obs::from("o"));
        assert_eq!(u.get(2).unwrap().observations()[0], Obs::from("q"));
    }

    #[test]
    fn intersection_with_no_extra_operands_is_identity() {
        let f = fixture();
        let s = set(&f, &[&["o"], &["p"]]);
        let i = CandidateSet::intersection_of(&s, &[]);
        assert!(i.same_members(&s));
    }

    #[test]
    fn intersection_keeps_common_members_only() {
        let f = fixture();
        let a = set(&f, &[&["o"], &["p"], &["q"]]);
        let b = set(&f, &[&["p"], &["q"]]);
        let c = set(&f, &[&["q"], &["r"]]);
        let i = CandidateSet::intersection_of(&a, &[&b, &c]);
        assert_eq!(i.len(), 1);
        assert!(i.contains(&candidate(&f, &["q"])));
    }

    #[test]
    fn intersection_of_disjoint_sets_is_empty() {
        let f = fixture();
        let a = set(&f, &[&["o"]]);
        let b = set(&f, &[&["p"]]);
        assert!(CandidateSet::intersection_of(&a, &[&b]).is_empty());
    }

    // ── Set laws ────────────────────────────────────────────────

    /// Short sequences over a few symbols, so collisions are common.
    fn arb_set() -> impl Strategy<Value = Vec<Vec<u8>>> {
        proptest::collection::vec(proptest::collection::vec(0u8..3, 0..3), 0..6)
    }

    fn materialize(filter: &Arc<Filter>, raw: &[Vec<u8>]) -> CandidateSet {
        let names = ["o", "p", "q"];
        raw.iter()
            .map(|seq| {
                ExtensionCandidate::new(
                    Arc::clone(filter),
                    seq.iter().map(|&i| names[i as usize]),
                )
            })
            .collect()
    }

    proptest! {
        #[test]
        fn union_is_idempotent(raw in arb_set()) {
            let f = fixture();
            let a = materialize(&f, &raw);
            let u = CandidateSet::union_of(&a, &[&a]);
            prop_assert!(u.same_members(&a));
        }

        #[test]
        fn union_is_commutative(ra in arb_set(), rb in arb_set()) {
            let f = fixture();
            let (a, b) = (materialize(&f, &ra), materialize(&f, &rb));
            let ab = CandidateSet::union_of(&a, &[&b]);
            let ba = CandidateSet::union_of(&b, &[&a]);
            prop_assert!(ab.same_members(&ba));
        }

        #[test]
        fn union_is_associative(ra in arb_set(), rb in arb_set(), rc in arb_set()) {
            let f = fixture();
            let (a, b, c) = (
                materialize(&f, &ra),
                materialize(&f, &rb),
                materialize(&f, &rc),
            );
            let left = CandidateSet::union_of(&CandidateSet::union_of(&a, &[&b]), &[&c]);
            let right = CandidateSet::union_of(&a, &[&CandidateSet::union_of(&b, &[&c])]);
            prop_assert!(left.same_members(&right));
        }

        #[test]
        fn intersection_is_idempotent(raw in arb_set()) {
            let f = fixture();
            let a = materialize(&f, &raw);
            let i = CandidateSet::intersection_of(&a, &[&a]);
            prop_assert!(i.same_members(&a));
        }

        #[test]
        fn intersection_is_commutative(ra in arb_set(), rb in arb_set()) {
            let f = fixture();
            let (a, b) = (materialize(&f, &ra), materialize(&f, &rb));
            let ab = CandidateSet::intersection_of(&a, &[&b]);
            let ba = CandidateSet::intersection_of(&b, &[&a]);
            prop_assert!(ab.same_members(&ba));
        }

        #[test]
        fn intersection_distributes_over_union(
            ra in arb_set(),
            rb in arb_set(),
            rc in arb_set(),
        ) {
            let f = fixture();
            let (a, b, c) = (
                materialize(&f, &ra),
                materialize(&f, &rb),
                materialize(&f, &rc),
            );
            let left = CandidateSet::intersection_of(&a, &[&CandidateSet::union_of(&b, &[&c])]);
            let right = CandidateSet::union_of(
                &CandidateSet::intersection_of(&a, &[&b]),
                &[&CandidateSet::intersection_of(&a, &[&c])],
            );
            prop_assert!(left.same_members(&right));
        }

        /// Sequence equality is an equivalence relation.
        #[test]
        fn candidate_equality_laws(ra in arb_set()) {
            let f = fixture();
            let a = materialize(&f, &ra);
            for x in a.iter() {
                prop_assert_eq!(x, x);
                for y in a.iter() {
                    prop_assert_eq!(x == y, y == x);
                    for z in a.iter() {
                        if x == y && y == z {
                            prop_assert_eq!(x, z);
                        }
                    }
                }
            }
        }
    }
}
