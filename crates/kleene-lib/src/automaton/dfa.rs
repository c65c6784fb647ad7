//! Deterministic automaton and its matcher.

use std::collections::BTreeSet;

use serde::Serialize;

use super::determinize::{DeterminizeStats, subset_construction};
use super::trace::{NoopTracer, Tracer};
use crate::Result;
use crate::graph::{Label, StateGraph, StateId};

/// DFA produced by subset construction.
///
/// State 0 is initial. No state has epsilon edges and no state has two edges
/// with the same label. `subsets[d]` lists the ENFA states DFA state `d`
/// stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dfa {
    graph: StateGraph,
    final_states: BTreeSet<StateId>,
    subsets: Vec<Vec<StateId>>,
}

impl Dfa {
    pub const INITIAL: StateId = 0;

    pub(super) fn from_parts(
        graph: StateGraph,
        final_states: BTreeSet<StateId>,
        subsets: Vec<Vec<StateId>>,
    ) -> Self {
        debug_assert_eq!(graph.len(), subsets.len());
        Self {
            graph,
            final_states,
            subsets,
        }
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    pub fn final_states(&self) -> &BTreeSet<StateId> {
        &self.final_states
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// ENFA states merged into `state`, ascending.
    pub fn subset(&self, state: StateId) -> &[StateId] {
        &self.subsets[state as usize]
    }

    pub fn subsets(&self) -> &[Vec<StateId>] {
        &self.subsets
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// The unique successor of `state` on `c`, if any.
    pub fn transition(&self, state: StateId, c: char) -> Option<StateId> {
        self.graph.targets(state, Label::Char(c)).next()
    }

    /// Whole-string match: every character must have an edge, and the
    /// state reached after the last one must be final.
    pub fn matches(&self, text: &str) -> bool {
        self.matches_traced(text, &mut NoopTracer)
    }

    pub fn matches_traced<T: Tracer>(&self, text: &str, tracer: &mut T) -> bool {
        let mut state = Self::INITIAL;
        tracer.trace_start(state);

        for (offset, c) in text.char_indices() {
            let Some(next) = self.transition(state, c) else {
                tracer.trace_dead_end(offset, c, state);
                return false;
            };
            tracer.trace_step(offset, c, state, next);
            state = next;
        }

        let accepted = self.is_final(state);
        tracer.trace_finish(state, accepted);
        accepted
    }

    /// No epsilon edges and at most one edge per label out of every state.
    pub fn is_deterministic(&self) -> bool {
        self.graph.iter().all(|(_, edges)| {
            let mut seen = BTreeSet::new();
            edges
                .iter()
                .all(|e| !e.label.is_epsilon() && seen.insert(e.label))
        })
    }

    /// Run subset construction over this DFA as if it were an ENFA with no
    /// epsilon edges. Yields an isomorphic DFA with the same numbering.
    pub fn determinize(&self, max_states: Option<u32>) -> Result<(Dfa, DeterminizeStats)> {
        let closures: Vec<BTreeSet<StateId>> = (0..self.len() as StateId)
            .map(|s| BTreeSet::from([s]))
            .collect();

        let (mut dfa, stats) = subset_construction(
            &self.graph,
            &closures,
            Self::INITIAL,
            |subset| subset.iter().any(|s| self.final_states.contains(s)),
            max_states,
        )?;

        // Keep subsets in terms of the ENFA this DFA came from.
        dfa.subsets = dfa
            .subsets
            .iter()
            .map(|members| {
                members
                    .iter()
                    .flat_map(|&s| self.subset(s).iter().copied())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .collect();

        Ok((dfa, stats))
    }
}
