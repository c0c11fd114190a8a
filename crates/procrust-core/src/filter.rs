//! The immutable filter value and its validating builder.

use crate::alphabet::Alphabet;
use crate::error::ConstructionError;
use crate::id::{ObsIdx, OutIdx, StateIdx};
use crate::state_set::StateSet;
use crate::symbol::{Obs, Out, State};
use smallvec::SmallVec;

/// One outgoing edge of a state: a target plus the non-empty set of
/// observations labeling the edge. Labels are sorted by index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The target state.
    pub target: StateIdx,
    /// Observations labeling the edge, sorted, at least one.
    pub labels: SmallVec<[ObsIdx; 2]>,
}

impl Transition {
    /// Whether this edge is labeled with `obs`.
    pub fn carries(&self, obs: ObsIdx) -> bool {
        self.labels.binary_search(&obs).is_ok()
    }
}

/// A Procrustean filter: states, initial states, an observation
/// alphabet, a transition relation, and per-state output labels.
///
/// Built once through [`FilterBuilder`]; immutable thereafter. All
/// queries — run simulation, the determinism check, the compatibility
/// graph, extension checking — are read-only, so a filter can be
/// shared freely (e.g. behind an `Arc`).
///
/// # Examples
///
/// ```
/// use procrust_core::FilterBuilder;
///
/// let filter = FilterBuilder::new()
///     .states(["s0", "s1"])
///     .initial(["s0"])
///     .observations(["a"])
///     .outputs(["x", "y"])
///     .edge("s0", "s1", ["a"])
///     .label("s0", ["x"])
///     .label("s1", ["y"])
///     .build()
///     .unwrap();
///
/// assert_eq!(filter.state_count(), 2);
/// assert!(filter.is_deterministic());
/// ```
#[derive(Clone, Debug)]
pub struct Filter {
    states: Alphabet<State>,
    initial: StateSet,
    alphabet: Alphabet<Obs>,
    outputs: Alphabet<Out>,
    /// Outgoing edges per source state, indexed by `StateIdx`.
    adjacency: Vec<SmallVec<[Transition; 4]>>,
    /// Output labels per state, sorted, indexed by `StateIdx`.
    labels: Vec<SmallVec<[OutIdx; 1]>>,
}

impl Filter {
    /// The declared state set `V`, in declaration order.
    pub fn states(&self) -> &Alphabet<State> {
        &self.states
    }

    /// The initial state set `V0`.
    pub fn initial(&self) -> &StateSet {
        &self.initial
    }

    /// The observation alphabet `Y`, in declaration order.
    pub fn alphabet(&self) -> &Alphabet<Obs> {
        &self.alphabet
    }

    /// The output alphabet `O`, in declaration order.
    pub fn outputs(&self) -> &Alphabet<Out> {
        &self.outputs
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Resolve a state symbol to its index.
    pub fn state_index(&self, state: &State) -> Option<StateIdx> {
        self.states.index_of(state).map(|i| StateIdx(i as u32))
    }

    /// The symbol of a state index. Panics only on an index from a
    /// different filter; indices handed out by this filter are always
    /// in range.
    pub fn state(&self, idx: StateIdx) -> &State {
        self.states
            .get(idx.0 as usize)
            .unwrap_or_else(|| panic!("state index {idx} out of range"))
    }

    /// Resolve an observation symbol to its index.
    pub fn obs_index(&self, obs: &Obs) -> Option<ObsIdx> {
        self.alphabet.index_of(obs).map(|i| ObsIdx(i as u32))
    }

    /// The symbol of an observation index.
    pub fn obs(&self, idx: ObsIdx) -> &Obs {
        self.alphabet
            .get(idx.0 as usize)
            .unwrap_or_else(|| panic!("observation index {idx} out of range"))
    }

    /// Resolve an output symbol to its index.
    pub fn output_index(&self, out: &Out) -> Option<OutIdx> {
        self.outputs.index_of(out).map(|i| OutIdx(i as u32))
    }

    /// Outgoing transitions of `source`.
    pub fn transitions_from(&self, source: StateIdx) -> &[Transition] {
        &self.adjacency[source.0 as usize]
    }

    /// Output labels of `state`, sorted by index.
    pub fn labels_of(&self, state: StateIdx) -> &[OutIdx] {
        &self.labels[state.0 as usize]
    }

    /// Whether the filter is deterministic: exactly one initial state,
    /// and no state has two outgoing edges sharing an observation
    /// label. A purely structural scan; no runs are simulated.
    pub fn is_deterministic(&self) -> bool {
        if self.initial.len() != 1 {
            return false;
        }
        let mut seen: SmallVec<[ObsIdx; 8]> = SmallVec::new();
        for edges in &self.adjacency {
            seen.clear();
            for transition in edges {
                for &obs in &transition.labels {
                    if seen.contains(&obs) {
                        return false;
                    }
                    seen.push(obs);
                }
            }
        }
        true
    }
}

/// Accumulates the declared sets and tables of a filter and validates
/// them into a [`Filter`].
///
/// Validation is strict: every state referenced by the initial set,
/// the transition table, or the output labeling must be declared via
/// [`states`](Self::states); every transition label must be declared
/// via [`observations`](Self::observations); every output label via
/// [`outputs`](Self::outputs). Nothing is coerced or invented — any
/// dangling reference fails [`build`](Self::build) with a
/// [`ConstructionError`].
#[derive(Clone, Debug, Default)]
pub struct FilterBuilder {
    states: Vec<State>,
    initial: Vec<State>,
    observations: Vec<Obs>,
    outputs: Vec<Out>,
    transitions: Vec<(State, State, Vec<Obs>)>,
    labels: Vec<(State, Vec<Out>)>,
}

impl FilterBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare states, appended in order. Duplicates collapse to the
    /// first occurrence.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare initial states (`V0`). May be empty: a filter with no
    /// initial states is degenerate but valid, and reaches nothing.
    pub fn initial<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<State>,
    {
        self.initial.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare the observation alphabet `Y`, in iteration order.
    pub fn observations<I>(mut self, observations: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Obs>,
    {
        self.observations
            .extend(observations.into_iter().map(Into::into));
        self
    }

    /// Declare the output alphabet `O`.
    pub fn outputs<I>(mut self, outputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Out>,
    {
        self.outputs.extend(outputs.into_iter().map(Into::into));
        self
    }

    /// Add a transition from `source` to `target` labeled with
    /// `observations`. Declaring the same edge twice merges the label
    /// sets.
    pub fn edge<S, T, I>(mut self, source: S, target: T, observations: I) -> Self
    where
        S: Into<State>,
        T: Into<State>,
        I: IntoIterator,
        I::Item: Into<Obs>,
    {
        self.transitions.push((
            source.into(),
            target.into(),
            observations.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Label `state` with `outputs`. Declaring the same state twice
    /// merges the label sets.
    pub fn label<S, I>(mut self, state: S, outputs: I) -> Self
    where
        S: Into<State>,
        I: IntoIterator,
        I::Item: Into<Out>,
    {
        self.labels
            .push((state.into(), outputs.into_iter().map(Into::into).collect()));
        self
    }

    /// Validate everything and produce an immutable [`Filter`].
    pub fn build(self) -> Result<Filter, ConstructionError> {
        let states: Alphabet<State> = self.states.into_iter().collect();
        if states.is_empty() {
            return Err(ConstructionError::NoStates);
        }
        let alphabet: Alphabet<Obs> = self.observations.into_iter().collect();
        let outputs: Alphabet<Out> = self.outputs.into_iter().collect();

        let resolve = |state: &State, context: &'static str| {
            states
                .index_of(state)
                .map(|i| StateIdx(i as u32))
                .ok_or_else(|| ConstructionError::UnknownState {
                    state: state.clone(),
                    context,
                })
        };

        let mut initial = StateSet::new();
        for state in &self.initial {
            initial.insert(resolve(state, "the initial state set")?);
        }

        let mut adjacency: Vec<SmallVec<[Transition; 4]>> =
            vec![SmallVec::new(); states.len()];
        for (source, target, obs_list) in &self.transitions {
            let src = resolve(source, "a transition source")?;
            let tgt = resolve(target, "a transition target")?;
            if obs_list.is_empty() {
                return Err(ConstructionError::UnlabeledEdge {
                    source: source.clone(),
                    target: target.clone(),
                });
            }
            let mut label_set: SmallVec<[ObsIdx; 2]> = SmallVec::new();
            for obs in obs_list {
                let idx = alphabet.index_of(obs).map(|i| ObsIdx(i as u32)).ok_or_else(
                    || ConstructionError::UnknownObservation {
                        obs: obs.clone(),
                        source: source.clone(),
                        target: target.clone(),
                    },
                )?;
                label_set.push(idx);
            }
            let edges = &mut adjacency[src.0 as usize];
            match edges.iter_mut().find(|t| t.target == tgt) {
                Some(existing) => existing.labels.extend(label_set),
                None => edges.push(Transition {
                    target: tgt,
                    labels: label_set,
                }),
            }
        }
        for edges in &mut adjacency {
            for transition in edges.iter_mut() {
                transition.labels.sort_unstable();
                transition.labels.dedup();
            }
        }

        let mut labels: Vec<SmallVec<[OutIdx; 1]>> = vec![SmallVec::new(); states.len()];
        for (state, out_list) in &self.labels {
            let idx = resolve(state, "the output labeling")?;
            let set = &mut labels[idx.0 as usize];
            for out in out_list {
                let out_idx = outputs.index_of(out).map(|i| OutIdx(i as u32)).ok_or_else(
                    || ConstructionError::UnknownOutput {
                        out: out.clone(),
                        state: state.clone(),
                    },
                )?;
                set.push(out_idx);
            }
        }
        for set in &mut labels {
            set.sort_unstable();
            set.dedup();
        }

        Ok(Filter {
            states,
            initial,
            alphabet,
            outputs,
            adjacency,
            labels,
        })
    }
}
