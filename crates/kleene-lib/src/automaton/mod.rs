//! ENFA, closure solver, subset construction and the DFA matcher.
//!
//! ```text
//! Enfa (graph + start/end) → compute_closures → determinize → Dfa::matches
//! ```
//!
//! Every stage reads the previous one and never mutates it.

mod closure;
mod determinize;
mod dfa;
mod dump;
mod enfa;
mod trace;

#[cfg(test)]
mod dfa_tests;

pub use closure::{ClosureStats, compute_closures, compute_closures_with_stats};
pub use determinize::{DeterminizeStats, determinize, determinize_from};
pub use dfa::Dfa;
pub use enfa::Enfa;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
