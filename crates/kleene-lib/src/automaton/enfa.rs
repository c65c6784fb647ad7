//! Epsilon-NFA built by the parser.

use std::collections::BTreeSet;

use serde::Serialize;

use super::closure::compute_closures;
use crate::Result;
use crate::graph::{Label, StateGraph, StateId};
use crate::parser;

/// Automaton whose edges may consume nothing.
///
/// Exactly one start state and one accepting end state. Closures are
/// computed once the graph is complete and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enfa {
    start: StateId,
    end: StateId,
    graph: StateGraph,
    closures: Vec<BTreeSet<StateId>>,
}

impl Enfa {
    /// Finish a graph: fix its start and end, then solve closures.
    pub fn new(graph: StateGraph, start: StateId, end: StateId) -> Self {
        let closures = compute_closures(&graph);
        Self {
            start,
            end,
            graph,
            closures,
        }
    }

    /// Parse with unbounded group nesting.
    pub fn parse(source: &str) -> Result<Self> {
        let mut graph = StateGraph::with_capacity(32);
        let fragment = parser::parse(source, &mut graph)?;
        Ok(Self::new(graph, fragment.start, fragment.end))
    }

    pub fn parse_with_recursion_limit(source: &str, limit: Option<u32>) -> Result<Self> {
        let mut graph = StateGraph::with_capacity(32);
        let fragment = parser::parse_with_recursion_limit(source, &mut graph, limit)?;
        Ok(Self::new(graph, fragment.start, fragment.end))
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn end(&self) -> StateId {
        self.end
    }

    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    pub fn closures(&self) -> &[BTreeSet<StateId>] {
        &self.closures
    }

    /// States reachable from `state` through epsilon edges only, `state` included.
    pub fn closure(&self, state: StateId) -> &BTreeSet<StateId> {
        &self.closures[state as usize]
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Simulate the ENFA directly, tracking the set of live states.
    ///
    /// Slower than the DFA; kept as a reference for checking determinization.
    pub fn accepts(&self, text: &str) -> bool {
        let mut current = self.closure(self.start).clone();

        for c in text.chars() {
            let mut next = BTreeSet::new();
            for &state in &current {
                for target in self.graph.targets(state, Label::Char(c)) {
                    next.extend(self.closure(target));
                }
            }
            if next.is_empty() {
                return false;
            }
            current = next;
        }

        current.contains(&self.end)
    }
}
