//! Seed-and-refine computation of the compatibility relation.
//!
//! Start from every output-compatible pair and propagate
//! incompatibility backwards through transitions until nothing more
//! falls out. Edges are only ever removed, so the loop terminates in
//! at most one sweep per pair.

use indexmap::IndexSet;
use procrust_core::{Filter, ObsIdx, StateIdx};

/// An unordered pair, normalized to `(min, max)`.
pub(crate) fn pair(u: StateIdx, v: StateIdx) -> (StateIdx, StateIdx) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// All unordered pairs of distinct states whose output label sets
/// intersect. States reached by a common sequence must agree on at
/// least one output to be mergeable, so this is the loosest relation
/// refinement can start from.
pub(crate) fn seed_pairs(filter: &Filter) -> IndexSet<(StateIdx, StateIdx)> {
    let n = filter.state_count() as u32;
    let mut pairs = IndexSet::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if outputs_intersect(filter, StateIdx(u), StateIdx(v)) {
                pairs.insert((StateIdx(u), StateIdx(v)));
            }
        }
    }
    pairs
}

/// Remove pairs until a fixed point: `{u, v}` survives only if every
/// observation labeling out-edges of both leads exclusively to target
/// pairs that are themselves still compatible (or equal).
pub(crate) fn refine_to_fixed_point(filter: &Filter, pairs: &mut IndexSet<(StateIdx, StateIdx)>) {
    loop {
        let snapshot: Vec<(StateIdx, StateIdx)> = pairs.iter().copied().collect();
        let mut removed = false;
        for (u, v) in snapshot {
            if violates(filter, pairs, u, v) {
                pairs.shift_remove(&(u, v));
                removed = true;
            }
        }
        if !removed {
            break;
        }
    }
}

/// Whether merging `u` and `v` is locally falsified: some observation
/// labels out-edges of both, and some pair of respective targets is
/// distinct and not currently compatible.
fn violates(
    filter: &Filter,
    pairs: &IndexSet<(StateIdx, StateIdx)>,
    u: StateIdx,
    v: StateIdx,
) -> bool {
    for o in 0..filter.alphabet().len() as u32 {
        let obs = ObsIdx(o);
        let from_u = filter.targets_on(u, obs);
        if from_u.is_empty() {
            continue;
        }
        let from_v = filter.targets_on(v, obs);
        if from_v.is_empty() {
            continue;
        }
        for tu in from_u.iter() {
            for tv in from_v.iter() {
                if tu != tv && !pairs.contains(&pair(tu, tv)) {
                    return true;
                }
            }
        }
    }
    false
}

/// Sorted output label slices intersect.
fn outputs_intersect(filter: &Filter, u: StateIdx, v: StateIdx) -> bool {
    let a = filter.labels_of(u);
    let b = filter.labels_of(v);
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}
