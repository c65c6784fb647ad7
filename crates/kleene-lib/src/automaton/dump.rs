//! Text dumps of ENFAs and DFAs.
//!
//! Both reuse `GraphPrinter` for the state lines. The ENFA dump opens with
//! its start and end states; accepting states carry a `✓`.

use std::fmt::Write;

use super::{Dfa, Enfa};
use crate::Colors;
use crate::graph::StateId;

impl Enfa {
    pub fn dump(&self) -> String {
        self.dump_colored(Colors::OFF)
    }

    pub fn dump_colored(&self, colors: Colors) -> String {
        let Colors {
            blue, dim, reset, ..
        } = colors;
        let mut out = format!(
            "{dim}start{reset} {blue}S{}{reset}, {dim}end{reset} {blue}S{}{reset}\n",
            self.start(),
            self.end()
        );
        let accepting = [self.end()];
        out.push_str(&self.graph().printer().accepting(&accepting).colors(colors).dump());
        out
    }

    /// One line per state listing its epsilon closure.
    pub fn dump_closures(&self) -> String {
        let mut out = String::new();
        for (state, closure) in self.closures().iter().enumerate() {
            writeln!(out, "S{state}: {}", join_ids(closure.iter().copied()))
                .expect("String write never fails");
        }
        out
    }
}

impl Dfa {
    pub fn dump(&self) -> String {
        self.dump_colored(Colors::OFF)
    }

    pub fn dump_colored(&self, colors: Colors) -> String {
        let accepting: Vec<StateId> = self.final_states().iter().copied().collect();
        self.graph()
            .printer()
            .accepting(&accepting)
            .colors(colors)
            .dump()
    }

    /// One line per DFA state listing the ENFA states it stands for.
    pub fn dump_subsets(&self) -> String {
        let mut out = String::new();
        for (state, members) in self.subsets().iter().enumerate() {
            writeln!(out, "S{state} = {}", join_ids(members.iter().copied()))
                .expect("String write never fails");
        }
        out
    }
}

fn join_ids(ids: impl Iterator<Item = StateId>) -> String {
    let ids: Vec<String> = ids.map(|id| id.to_string()).collect();
    format!("{{{}}}", ids.join(", "))
}
