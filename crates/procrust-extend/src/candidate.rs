//! Observation sequences under exploration against a filter.

use crate::error::InvalidObservationError;
use procrust_core::{Filter, Obs, StateIdx};
use std::fmt;
use std::sync::Arc;

/// An ordered observation sequence bound to the filter it is explored
/// against.
///
/// The binding is a shared immutable [`Arc<Filter>`], so the filter
/// always outlives every candidate derived from it and many candidates
/// share one filter cheaply. The sequence itself is owned: one-step
/// extension always materializes a fresh copy per child, so siblings
/// never share backing storage.
///
/// Equality is by sequence only — same length, element-wise equal,
/// order-sensitive. The filter binding does not participate.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use procrust_core::{FilterBuilder, Obs};
/// use procrust_extend::ExtensionCandidate;
///
/// let filter = Arc::new(
///     FilterBuilder::new()
///         .states(["s0", "s1"])
///         .initial(["s0"])
///         .observations(["a", "b"])
///         .edge("s0", "s1", ["a"])
///         .build()
///         .unwrap(),
/// );
///
/// let root = ExtensionCandidate::empty(Arc::clone(&filter));
/// let frontier = root.extend_by_one();
/// assert_eq!(frontier.len(), 2); // one child per alphabet symbol
/// assert_eq!(frontier[0].observations(), &[Obs::from("a")]);
/// ```
#[derive(Clone, Debug)]
pub struct ExtensionCandidate {
    sequence: Vec<Obs>,
    filter: Arc<Filter>,
}

impl ExtensionCandidate {
    /// The empty sequence bound to `filter`.
    pub fn empty(filter: Arc<Filter>) -> Self {
        Self {
            sequence: Vec::new(),
            filter,
        }
    }

    /// A candidate with the given sequence bound to `filter`. The
    /// sequence is not validated here; call [`check`](Self::check).
    pub fn new<I>(filter: Arc<Filter>, sequence: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Obs>,
    {
        Self {
            sequence: sequence.into_iter().map(Into::into).collect(),
            filter,
        }
    }

    /// The filter this candidate is bound to.
    pub fn filter(&self) -> &Arc<Filter> {
        &self.filter
    }

    /// The observation sequence.
    pub fn observations(&self) -> &[Obs] {
        &self.sequence
    }

    /// Sequence length.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Validate the sequence against the bound filter's alphabet.
    /// Fails on the first symbol outside the alphabet.
    pub fn check(&self) -> Result<(), InvalidObservationError> {
        for obs in &self.sequence {
            if !self.filter.alphabet().contains(obs) {
                return Err(InvalidObservationError { obs: obs.clone() });
            }
        }
        Ok(())
    }

    /// Whether this candidate is a valid extension from `from`: the
    /// sequence passes [`check`](Self::check) and is traceable — it
    /// reaches a non-empty state set from `from`. The empty sequence
    /// is vacuously an extension of every state.
    pub fn is_extension_of(&self, from: StateIdx) -> bool {
        if self.check().is_err() {
            return false;
        }
        if self.sequence.is_empty() {
            return true;
        }
        !self.filter.reaches_from(from, &self.sequence).is_empty()
    }

    /// All one-symbol extensions of this candidate, one per alphabet
    /// symbol in alphabet declaration order. Returns an empty vector
    /// if [`check`](Self::check) fails.
    ///
    /// Every child owns an independent copy of the sequence, so
    /// extending one child can never corrupt a sibling.
    pub fn extend_by_one(&self) -> Vec<ExtensionCandidate> {
        if self.check().is_err() {
            return Vec::new();
        }
        let mut extended = Vec::with_capacity(self.filter.alphabet().len());
        for obs in self.filter.alphabet().iter() {
            let mut sequence = Vec::with_capacity(self.sequence.len() + 1);
            sequence.extend_from_slice(&self.sequence);
            sequence.push(obs.clone());
            extended.push(ExtensionCandidate {
                sequence,
                filter: Arc::clone(&self.filter),
            });
        }
        extended
    }
}

impl PartialEq for ExtensionCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl Eq for ExtensionCandidate {}

impl fmt::Display for ExtensionCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for (i, obs) in self.sequence.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{obs}")?;
        }
        write!(f, " ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procrust_core::State;
    use procrust_test_utils::ten_state_filter;

    fn fixture() -> Arc<Filter> {
        Arc::new(ten_state_filter())
    }

    fn idx(filter: &Filter, name: &str) -> StateIdx {
        filter.state_index(&State::from(name)).unwrap()
    }

    // ── check ───────────────────────────────────────────────────

    #[test]
    fn check_accepts_alphabet_symbols() {
        let candidate = ExtensionCandidate::new(fixture(), ["o", "e", "g"]);
        assert_eq!(candidate.check(), Ok(()));
    }

    #[test]
    fn check_reports_the_foreign_symbol() {
        let candidate = ExtensionCandidate::new(fixture(), ["o", "zzz"]);
        let err = candidate.check().unwrap_err();
        assert_eq!(err.obs, Obs::from("zzz"));
    }

    // ── is_extension_of ─────────────────────────────────────────

    #[test]
    fn empty_candidate_extends_every_state() {
        let filter = fixture();
        let candidate = ExtensionCandidate::empty(Arc::clone(&filter));
        for s in 0..filter.state_count() as u32 {
            assert!(candidate.is_extension_of(StateIdx(s)));
        }
    }

    #[test]
    fn traceable_sequence_is_an_extension() {
        let filter = fixture();
        let candidate = ExtensionCandidate::new(Arc::clone(&filter), ["o", "e", "g"]);
        assert!(candidate.is_extension_of(idx(&filter, "w0")));
    }

    #[test]
    fn untraceable_sequence_is_not_an_extension() {
        let filter = fixture();
        // "h" labels no edge out of w0.
        let candidate = ExtensionCandidate::new(Arc::clone(&filter), ["h"]);
        assert!(!candidate.is_extension_of(idx(&filter, "w0")));
    }

    #[test]
    fn invalid_symbol_degrades_to_false() {
        let filter = fixture();
        let candidate = ExtensionCandidate::new(Arc::clone(&filter), ["zzz"]);
        assert!(!candidate.is_extension_of(idx(&filter, "w0")));
    }

    // ── extend_by_one ───────────────────────────────────────────

    #[test]
    fn extension_yields_one_child_per_symbol() {
        let filter = fixture();
        let root = ExtensionCandidate::new(Arc::clone(&filter), ["o"]);
        let frontier = root.extend_by_one();
        assert_eq!(frontier.len(), filter.alphabet().len());
        for child in &frontier {
            assert_eq!(child.len(), 2);
        }
    }

    #[test]
    fn extension_follows_alphabet_order() {
        let filter = fixture();
        let frontier = ExtensionCandidate::empty(Arc::clone(&filter)).extend_by_one();
        let appended: Vec<&Obs> = frontier
            .iter()
            .map(|c| c.observations().last().unwrap())
            .collect();
        let alphabet: Vec<&Obs> = filter.alphabet().iter().collect();
        assert_eq!(appended, alphabet);
    }

    #[test]
    fn extension_of_invalid_candidate_is_empty() {
        let candidate = ExtensionCandidate::new(fixture(), ["zzz"]);
        assert!(candidate.extend_by_one().is_empty());
    }

    #[test]
    fn siblings_own_independent_sequences() {
        // Build two generations from one parent and check no write
        // ever leaked across branches.
        let filter = fixture();
        let parent = ExtensionCandidate::new(Arc::clone(&filter), ["o"]);
        let children = parent.extend_by_one();
        let first = children[0].clone();
        let second = children[1].clone();

        let grand_first = first.extend_by_one();
        let grand_second = second.extend_by_one();

        // Parent and first generation are untouched.
        assert_eq!(parent.observations(), &[Obs::from("o")]);
        assert_eq!(first.observations(), &[Obs::from("o"), Obs::from("a")]);
        assert_eq!(second.observations(), &[Obs::from("o"), Obs::from("b")]);

        // Each grandchild extends its own parent only.
        for g in &grand_first {
            assert_eq!(&g.observations()[..2], first.observations());
        }
        for g in &grand_second {
            assert_eq!(&g.observations()[..2], second.observations());
        }
    }

    // ── equality and display ────────────────────────────────────

    #[test]
    fn equality_is_by_sequence_only() {
        let a = ExtensionCandidate::new(fixture(), ["o", "e"]);
        let b = ExtensionCandidate::new(fixture(), ["o", "e"]);
        let c = ExtensionCandidate::new(fixture(), ["e", "o"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_matches_bracketed_form() {
        let candidate = ExtensionCandidate::new(fixture(), ["o", "e", "g"]);
        assert_eq!(candidate.to_string(), "[ o, e, g ]");
        assert_eq!(ExtensionCandidate::empty(fixture()).to_string(), "[  ]");
    }
}
