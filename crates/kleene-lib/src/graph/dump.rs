//! Text dumps of a `StateGraph` for snapshot tests and the CLI.
//!
//! One line per state:
//!
//! ```text
//! S0: 'a' → S1, ε → S2
//! S1: ∅
//! ```

use std::fmt::Write;

use super::{StateGraph, StateId};
use crate::Colors;

/// Printer for `StateGraph` with configurable output options.
pub struct GraphPrinter<'a> {
    graph: &'a StateGraph,
    accepting: &'a [StateId],
    colors: Colors,
}

impl<'a> GraphPrinter<'a> {
    pub fn new(graph: &'a StateGraph) -> Self {
        Self {
            graph,
            accepting: &[],
            colors: Colors::OFF,
        }
    }

    /// Mark states as accepting (rendered with a trailing `✓`).
    pub fn accepting(mut self, states: &'a [StateId]) -> Self {
        self.accepting = states;
        self
    }

    pub fn colors(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> std::fmt::Result {
        let c = self.colors;

        for (id, edges) in self.graph.iter() {
            write!(w, "{}S{}{}:", c.blue, id, c.reset)?;

            if edges.is_empty() {
                write!(w, " {}∅{}", c.dim, c.reset)?;
            }

            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    write!(w, ",")?;
                }
                write!(
                    w,
                    " {}{}{} {}→{} {}S{}{}",
                    c.green, edge.label, c.reset, c.dim, c.reset, c.blue, edge.target, c.reset
                )?;
            }

            if self.accepting.contains(&id) {
                write!(w, " {}✓{}", c.green, c.reset)?;
            }

            writeln!(w)?;
        }

        Ok(())
    }
}

impl StateGraph {
    pub fn dump(&self) -> String {
        GraphPrinter::new(self).dump()
    }

    pub fn printer(&self) -> GraphPrinter<'_> {
        GraphPrinter::new(self)
    }
}
