//! Epsilon-closure solver.
//!
//! Whole-graph fixed point: every closure starts as `{s}`, then full passes
//! union `closure(t)` into `closure(s)` for each epsilon edge `s → t` until a
//! pass changes nothing. Closures only grow and are bounded by the state
//! count, so this terminates, and the result does not depend on state order
//! or on how `*`/`+` back-edges form cycles.
//!
//! Passes sweep states in descending id order. The parser numbers a
//! fragment's states before the states of whatever follows it, so most
//! epsilon edges point to higher ids and a single descending sweep carries a
//! closure the whole length of a forward chain. Back-edges of `*`/`+` and
//! wrapper states pointing into their inner fragment cost one extra pass per
//! nesting level, not one per state.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::graph::{StateGraph, StateId};

/// Counters collected while solving closures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClosureStats {
    /// Full passes over the graph, including the final pass with no growth.
    pub passes: usize,
}

/// Compute the epsilon closure of every state.
pub fn compute_closures(graph: &StateGraph) -> Vec<BTreeSet<StateId>> {
    compute_closures_with_stats(graph).0
}

pub fn compute_closures_with_stats(graph: &StateGraph) -> (Vec<BTreeSet<StateId>>, ClosureStats) {
    let mut closures: Vec<BTreeSet<StateId>> = (0..graph.len() as StateId)
        .map(|s| BTreeSet::from([s]))
        .collect();
    let mut stats = ClosureStats::default();

    loop {
        stats.passes += 1;
        let mut grew = false;

        for state in (0..graph.len() as StateId).rev() {
            // Taken out so the targets' sets can be read while this one grows.
            let mut closure = std::mem::take(&mut closures[state as usize]);
            let before = closure.len();

            for target in graph.epsilon_targets(state) {
                if target != state {
                    closure.extend(&closures[target as usize]);
                }
            }

            grew |= closure.len() > before;
            closures[state as usize] = closure;
        }

        if !grew {
            return (closures, stats);
        }
    }
}
