//! Core graph types and Thompson fragment combinators.
//!
//! States are dense `StateId` indices into a flat `Vec`. The graph only grows:
//! states and edges are never removed, so an id stays valid for the life of
//! the graph.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Index into `StateGraph::states`.
pub type StateId = u32;

/// What an edge consumes.
///
/// `Epsilon` orders before every character, so epsilon edges lead each
/// state's edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Label {
    /// Consumes no input. Control flow only.
    Epsilon,
    Char(char),
}

impl Label {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Label::Epsilon => None,
            Label::Char(c) => Some(c),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => write!(f, "ε"),
            Label::Char(c) => write!(f, "'{}'", c.escape_debug()),
        }
    }
}

/// A labeled edge.
///
/// Field order drives the derived `Ord`: edges sort by label first, then by
/// target, which makes every label's edges a contiguous range of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    pub label: Label,
    pub target: StateId,
}

impl Edge {
    pub fn new(label: Label, target: StateId) -> Self {
        Self { label, target }
    }
}

/// A graph fragment with single entry and exit states.
///
/// Every grammar rule produces one. A path from `start` to `end` always exists
/// using the edges built so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub start: StateId,
    pub end: StateId,
}

impl Fragment {
    pub fn new(start: StateId, end: StateId) -> Self {
        Self { start, end }
    }

    /// Single-state fragment where start equals end.
    pub fn single(state: StateId) -> Self {
        Self {
            start: state,
            end: state,
        }
    }
}

/// Append-only state arena.
///
/// Each state owns an ordered set of outgoing edges. Inserting an edge that
/// already exists is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateGraph {
    states: Vec<BTreeSet<Edge>>,
}

impl StateGraph {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
        }
    }

    /// Add a state with no edges, returning its ID.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(BTreeSet::new());
        id
    }

    /// Add an edge. Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, from: StateId, to: StateId, label: Label) -> bool {
        self.states[from as usize].insert(Edge::new(label, to))
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) -> bool {
        self.add_edge(from, to, Label::Epsilon)
    }

    /// Number of states in the graph.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Total number of edges across all states.
    pub fn edge_count(&self) -> usize {
        self.states.iter().map(BTreeSet::len).sum()
    }

    /// Outgoing edges of a state, ordered by `(label, target)`.
    pub fn edges(&self, state: StateId) -> &BTreeSet<Edge> {
        &self.states[state as usize]
    }

    /// Targets of every edge leaving `state` with `label`.
    ///
    /// Ordered range lookup, no scan over the other labels.
    pub fn targets(&self, state: StateId, label: Label) -> impl Iterator<Item = StateId> + '_ {
        let lo = Edge::new(label, 0);
        let hi = Edge::new(label, StateId::MAX);
        self.states[state as usize].range(lo..=hi).map(|e| e.target)
    }

    /// Targets reachable from `state` by a single epsilon edge.
    pub fn epsilon_targets(&self, state: StateId) -> impl Iterator<Item = StateId> + '_ {
        self.targets(state, Label::Epsilon)
    }

    /// Distinct non-epsilon labels leaving `state`, in ascending order.
    pub fn labels(&self, state: StateId) -> impl Iterator<Item = char> + '_ {
        let mut last = None;
        self.states[state as usize].iter().filter_map(move |e| {
            let c = e.label.as_char()?;
            if last == Some(c) {
                return None;
            }
            last = Some(c);
            Some(c)
        })
    }

    /// Iterate over all states with their edge sets.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &BTreeSet<Edge>)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, edges)| (i as StateId, edges))
    }

    /// Iterate over every edge as `(source, edge)`.
    pub fn all_edges(&self) -> impl Iterator<Item = (StateId, Edge)> + '_ {
        self.iter()
            .flat_map(|(id, edges)| edges.iter().map(move |e| (id, *e)))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fragment Combinators
    // ─────────────────────────────────────────────────────────────────────

    /// Single state, no edges. Accepts only the empty string.
    pub fn empty_fragment(&mut self) -> Fragment {
        Fragment::single(self.add_state())
    }

    /// Two fresh states joined by one edge labeled `c`.
    pub fn literal(&mut self, c: char) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();
        self.add_edge(start, end, Label::Char(c));
        Fragment::new(start, end)
    }

    /// Connect fragments in sequence: f1 → f2 → ... → fn
    ///
    /// Each fragment's end gets an epsilon edge to the next fragment's start.
    pub fn concat(&mut self, fragments: &[Fragment]) -> Fragment {
        match fragments {
            [] => self.empty_fragment(),
            [single] => *single,
            [first, .., last] => {
                for window in fragments.windows(2) {
                    self.add_epsilon(window[0].end, window[1].start);
                }
                Fragment::new(first.start, last.end)
            }
        }
    }

    /// Connect fragments in parallel: start → [f1|f2|...|fn] → end
    ///
    /// A single alternative is returned unchanged.
    pub fn alternation(&mut self, fragments: &[Fragment]) -> Fragment {
        match fragments {
            [] => self.empty_fragment(),
            [single] => *single,
            _ => {
                let start = self.add_state();
                let end = self.add_state();
                for f in fragments {
                    self.add_epsilon(start, f.start);
                    self.add_epsilon(f.end, end);
                }
                Fragment::new(start, end)
            }
        }
    }

    /// Zero or more: inner*
    ///
    /// ```text
    ///      ┌──────────────────────┐
    ///      ↓                      │
    /// start ─→ inner ─→ end ──────┘
    ///   │               ↑
    ///   └───────────────┘
    /// ```
    pub fn zero_or_more(&mut self, inner: Fragment) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();

        self.add_epsilon(start, inner.start);
        self.add_epsilon(start, end);
        self.add_epsilon(inner.end, end);
        self.add_epsilon(end, start);

        Fragment::new(start, end)
    }

    /// Zero or one: inner?
    ///
    /// ```text
    /// start ─→ inner ─→ end
    ///   │               ↑
    ///   └───────────────┘
    /// ```
    pub fn zero_or_one(&mut self, inner: Fragment) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();

        self.add_epsilon(start, inner.start);
        self.add_epsilon(start, end);
        self.add_epsilon(inner.end, end);

        Fragment::new(start, end)
    }

    /// One or more: inner+
    ///
    /// Same back-edge as `*`, but no edge skips the inner fragment.
    pub fn one_or_more(&mut self, inner: Fragment) -> Fragment {
        let start = self.add_state();
        let end = self.add_state();

        self.add_epsilon(start, inner.start);
        self.add_epsilon(inner.end, end);
        self.add_epsilon(end, start);

        Fragment::new(start, end)
    }
}
