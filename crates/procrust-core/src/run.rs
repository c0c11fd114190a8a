//! Run semantics: reachable-state sets for observation sequences.
//!
//! A filter is in general nondeterministic, so a run tracks a *set*
//! of states, subset-construction style: each observation maps the
//! current frontier to the union of all matching successors. An empty
//! frontier is absorbing — once no state matches, no suffix can
//! recover.

use crate::filter::Filter;
use crate::id::{ObsIdx, StateIdx};
use crate::state_set::StateSet;
use crate::symbol::Obs;

impl Filter {
    /// States reachable from `from` after consuming `sequence` in
    /// order. The empty sequence returns `from` unchanged.
    ///
    /// An observation outside the alphabet is not an error here — it
    /// matches no edge, so the frontier empties. Callers that need
    /// the distinction validate up front (the extension candidate
    /// layer does).
    ///
    /// # Examples
    ///
    /// ```
    /// use procrust_core::{FilterBuilder, Obs};
    ///
    /// let filter = FilterBuilder::new()
    ///     .states(["s0", "s1", "s2"])
    ///     .initial(["s0"])
    ///     .observations(["a", "b"])
    ///     .edge("s0", "s1", ["a"])
    ///     .edge("s0", "s2", ["a"])
    ///     .build()
    ///     .unwrap();
    ///
    /// // Both "a"-successors are reached simultaneously.
    /// let reached = filter.reaches(&[Obs::from("a")]);
    /// assert_eq!(reached.len(), 2);
    /// ```
    pub fn reaches_with(&self, from: &StateSet, sequence: &[Obs]) -> StateSet {
        let mut current = from.clone();
        for obs in sequence {
            if current.is_empty() {
                break;
            }
            current = match self.obs_index(obs) {
                Some(idx) => self.step(&current, idx),
                None => StateSet::new(),
            };
        }
        current
    }

    /// States reachable from the initial set `V0` after `sequence`.
    pub fn reaches(&self, sequence: &[Obs]) -> StateSet {
        self.reaches_with(self.initial(), sequence)
    }

    /// States reachable from the single state `from` after `sequence`.
    pub fn reaches_from(&self, from: StateIdx, sequence: &[Obs]) -> StateSet {
        self.reaches_with(&StateSet::singleton(from), sequence)
    }

    /// Targets of all `obs`-labeled edges out of `source`.
    pub fn targets_on(&self, source: StateIdx, obs: ObsIdx) -> StateSet {
        let mut targets = StateSet::new();
        for transition in self.transitions_from(source) {
            if transition.carries(obs) {
                targets.insert(transition.target);
            }
        }
        targets
    }

    /// One subset-construction step: all `obs`-successors of `current`.
    fn step(&self, current: &StateSet, obs: ObsIdx) -> StateSet {
        let mut next = StateSet::new();
        for state in current.iter() {
            for transition in self.transitions_from(state) {
                if transition.carries(obs) {
                    next.insert(transition.target);
                }
            }
        }
        next
    }
}
