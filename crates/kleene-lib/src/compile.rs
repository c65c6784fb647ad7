//! Compilation front door: pattern in, matcher out.

use serde::Serialize;

use crate::Result;
use crate::automaton::{DeterminizeStats, Dfa, Enfa, NoopTracer, Tracer, determinize};

/// Resource limits for compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Maximum DFA states (default: 10,000).
    pub(crate) max_dfa_states: u32,
    /// Maximum group nesting (default: 512).
    pub(crate) recursion_limit: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dfa_states: 10_000,
            recursion_limit: 512,
        }
    }
}

impl Limits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DFA state limit.
    pub fn max_dfa_states(mut self, limit: u32) -> Self {
        self.max_dfa_states = limit;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_max_dfa_states(&self) -> u32 {
        self.max_dfa_states
    }
    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Configured compiler. Holds no state between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct Compiler {
    limits: Limits,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn compile(&self, pattern: &str) -> Result<Automaton> {
        let enfa = Enfa::parse_with_recursion_limit(pattern, Some(self.limits.recursion_limit))?;
        let (dfa, stats) = determinize(&enfa, Some(self.limits.max_dfa_states))?;

        Ok(Automaton {
            pattern: pattern.to_string(),
            enfa,
            dfa,
            stats,
        })
    }
}

/// Compile `pattern` with default limits.
pub fn compile(pattern: &str) -> Result<Automaton> {
    Compiler::new().compile(pattern)
}

/// A compiled pattern.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Automaton {
    pattern: String,
    enfa: Enfa,
    dfa: Dfa,
    stats: DeterminizeStats,
}

impl Automaton {
    /// Whether the whole of `text` is in the pattern's language.
    pub fn matches(&self, text: &str) -> bool {
        self.dfa.matches_traced(text, &mut NoopTracer)
    }

    pub fn matches_traced<T: Tracer>(&self, text: &str, tracer: &mut T) -> bool {
        self.dfa.matches_traced(text, tracer)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn enfa(&self) -> &Enfa {
        &self.enfa
    }

    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn stats(&self) -> DeterminizeStats {
        self.stats
    }

    pub fn enfa_state_count(&self) -> usize {
        self.enfa.len()
    }

    pub fn dfa_state_count(&self) -> usize {
        self.dfa.len()
    }
}
