//! Tracing hooks for the DFA matcher.
//!
//! `Dfa::matches` runs with `NoopTracer`, whose methods are empty and inlined
//! away. `PrintTracer` records one line per event for `kleene trace`.

use crate::Colors;
use crate::graph::{Label, StateId};

use super::Dfa;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Transitions and the verdict.
    #[default]
    Default,
    /// Verbose (-v): byte offsets on every step.
    Verbose,
    /// Very verbose (-vv): offsets plus the ENFA subset behind each state.
    VeryVerbose,
}

/// Matcher instrumentation.
///
/// Called in order: `trace_start` once, then `trace_step` per consumed
/// character, then either `trace_dead_end` or `trace_finish`.
pub trait Tracer {
    /// Called before the first character with the initial state.
    fn trace_start(&mut self, state: StateId);

    /// Called after following the edge for `c` at byte `offset`.
    fn trace_step(&mut self, offset: usize, c: char, from: StateId, to: StateId);

    /// Called when `state` has no edge for `c`. The match is rejected.
    fn trace_dead_end(&mut self, offset: usize, c: char, state: StateId);

    /// Called after the input is exhausted.
    fn trace_finish(&mut self, state: StateId, accepted: bool);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_start(&mut self, _state: StateId) {}

    #[inline(always)]
    fn trace_step(&mut self, _offset: usize, _c: char, _from: StateId, _to: StateId) {}

    #[inline(always)]
    fn trace_dead_end(&mut self, _offset: usize, _c: char, _state: StateId) {}

    #[inline(always)]
    fn trace_finish(&mut self, _state: StateId, _accepted: bool) {}
}

/// Tracer that collects a readable log of a match.
pub struct PrintTracer<'d> {
    dfa: &'d Dfa,
    verbosity: Verbosity,
    lines: Vec<String>,
    colors: Colors,
}

impl<'d> PrintTracer<'d> {
    pub fn new(dfa: &'d Dfa, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            dfa,
            verbosity,
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, each terminated by a newline.
    pub fn render(&self) -> String {
        self.lines.iter().map(|line| format!("{line}\n")).collect()
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn state(&self, id: StateId) -> String {
        let c = self.colors;
        let mut out = format!("{}S{}{}", c.blue, id, c.reset);

        if self.verbosity == Verbosity::VeryVerbose {
            let members: Vec<String> = self.dfa.subset(id).iter().map(u32::to_string).collect();
            out.push_str(&format!(" {}{{{}}}{}", c.dim, members.join(", "), c.reset));
        }

        if self.dfa.is_final(id) {
            out.push_str(&format!(" {}✓{}", c.green, c.reset));
        }

        out
    }

    fn prefix(&self, offset: usize) -> String {
        match self.verbosity {
            Verbosity::Default => String::new(),
            _ => format!("{}@{offset:<3}{} ", self.colors.dim, self.colors.reset),
        }
    }

    fn label(&self, c: char) -> String {
        format!("{}{}{}", self.colors.green, Label::Char(c), self.colors.reset)
    }
}

impl Tracer for PrintTracer<'_> {
    fn trace_start(&mut self, state: StateId) {
        let line = format!("start {}", self.state(state));
        self.lines.push(line);
    }

    fn trace_step(&mut self, offset: usize, c: char, from: StateId, to: StateId) {
        let Colors { dim, reset, .. } = self.colors;
        let line = format!(
            "{}{} {} {dim}→{reset} {}",
            self.prefix(offset),
            self.label(c),
            self.state(from),
            self.state(to)
        );
        self.lines.push(line);
    }

    fn trace_dead_end(&mut self, offset: usize, c: char, state: StateId) {
        let Colors { dim, reset, .. } = self.colors;
        let line = format!(
            "{}{} {} {dim}→ ∅{reset}",
            self.prefix(offset),
            self.label(c),
            self.state(state)
        );
        self.lines.push(line);
        self.lines.push("no match".to_string());
    }

    fn trace_finish(&mut self, state: StateId, accepted: bool) {
        let line = if accepted {
            format!("{}match{} at S{}", self.colors.green, self.colors.reset, state)
        } else {
            format!("no match: S{state} is not final")
        };
        self.lines.push(line);
    }
}
