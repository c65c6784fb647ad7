//! Kleene: minimal regular expressions compiled to deterministic automata.
//!
//! # Example
//!
//! ```
//! use kleene_lib::compile;
//!
//! let automaton = compile("(ab)*c?").expect("valid pattern");
//! assert!(automaton.matches("ababc"));
//! assert!(!automaton.matches("aba"));
//! ```
//!
//! The pipeline runs strictly forward:
//!
//! ```text
//! pattern → lexer → parser (ENFA) → closures → subset construction (DFA) → matcher
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod automaton;
pub mod colors;
pub mod compile;
pub mod diagnostics;
pub mod graph;
pub mod parser;

#[cfg(test)]
mod compile_tests;

pub use automaton::{
    ClosureStats, DeterminizeStats, Dfa, Enfa, NoopTracer, PrintTracer, Tracer, Verbosity,
    compute_closures, compute_closures_with_stats, determinize, determinize_from,
};
pub use colors::Colors;
pub use compile::{Automaton, Compiler, Limits, compile};
pub use diagnostics::{DiagnosticsPrinter, ParseError, ParseErrorKind, Span};
pub use graph::{Edge, Fragment, Label, StateGraph, StateId};

/// Errors that can occur while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Recursion fuel exhausted (groups nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// Subset construction produced more DFA states than allowed.
    #[error("DFA state limit of {0} exceeded")]
    StateLimitExceeded(u32),
}

impl Error {
    /// The parse error behind this failure, if the pattern was malformed.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
