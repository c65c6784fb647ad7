//! Subset construction.
//!
//! DFA states are closed sets of ENFA states. An `IndexSet` keyed by the set
//! itself doubles as the worklist and the dedupe table: a subset's index is
//! its DFA state id, and a set seen again maps back to the id it got first.

use std::collections::BTreeSet;

use indexmap::IndexSet;
use serde::Serialize;

use super::{Dfa, Enfa};
use crate::graph::{Label, StateGraph, StateId};
use crate::{Error, Result};

/// Counters collected while determinizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeterminizeStats {
    /// Distinct subsets created, equal to the number of DFA states.
    pub subsets: usize,
    /// Transitions whose target subset already existed.
    pub merged: usize,
    /// DFA edges added.
    pub transitions: usize,
}

/// Determinize `enfa` starting from its start state.
///
/// Fails with `Error::StateLimitExceeded` once more than `max_states` DFA
/// states would be needed.
pub fn determinize(enfa: &Enfa, max_states: Option<u32>) -> Result<(Dfa, DeterminizeStats)> {
    determinize_from(enfa, enfa.start(), max_states)
}

/// Determinize the part of `enfa` reachable from `initial`.
pub fn determinize_from(
    enfa: &Enfa,
    initial: StateId,
    max_states: Option<u32>,
) -> Result<(Dfa, DeterminizeStats)> {
    let end = enfa.end();
    subset_construction(
        enfa.graph(),
        enfa.closures(),
        initial,
        |subset| subset.contains(&end),
        max_states,
    )
}

/// Shared core for ENFAs and for re-determinizing an existing DFA.
///
/// `closures[s]` must contain `s` and be closed under epsilon edges.
pub(super) fn subset_construction(
    graph: &StateGraph,
    closures: &[BTreeSet<StateId>],
    initial: StateId,
    is_accepting: impl Fn(&BTreeSet<StateId>) -> bool,
    max_states: Option<u32>,
) -> Result<(Dfa, DeterminizeStats)> {
    let mut subsets: IndexSet<BTreeSet<StateId>> = IndexSet::new();
    let mut dfa_graph = StateGraph::new();
    let mut final_states = BTreeSet::new();
    let mut stats = DeterminizeStats::default();

    if max_states == Some(0) {
        return Err(Error::StateLimitExceeded(0));
    }

    subsets.insert(closures[initial as usize].clone());
    dfa_graph.add_state();

    let mut next = 0;
    while let Some(current) = subsets.get_index(next).cloned() {
        let from = next as StateId;
        next += 1;

        if is_accepting(&current) {
            final_states.insert(from);
        }

        let labels: BTreeSet<char> = current.iter().flat_map(|&s| graph.labels(s)).collect();

        for c in labels {
            let mut candidate = BTreeSet::new();
            for &state in &current {
                for target in graph.targets(state, Label::Char(c)) {
                    candidate.extend(&closures[target as usize]);
                }
            }

            let (to, inserted) = subsets.insert_full(candidate);
            if inserted {
                if let Some(limit) = max_states
                    && subsets.len() > limit as usize
                {
                    return Err(Error::StateLimitExceeded(limit));
                }
                dfa_graph.add_state();
            } else {
                stats.merged += 1;
            }

            dfa_graph.add_edge(from, to as StateId, Label::Char(c));
            stats.transitions += 1;
        }
    }

    stats.subsets = subsets.len();

    let subsets = subsets
        .into_iter()
        .map(|set| set.into_iter().collect())
        .collect();

    Ok((Dfa::from_parts(dfa_graph, final_states, subsets), stats))
}
