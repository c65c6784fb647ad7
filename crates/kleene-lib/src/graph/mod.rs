//! Arena graph shared by every automaton stage.
//!
//! The parser grows a `StateGraph` directly while it recognizes the pattern,
//! one `Fragment` per syntactic construct. The same graph type backs the DFA,
//! where no edge carries `Label::Epsilon`.
//!
//! # Architecture
//!
//! ```text
//! Parser → StateGraph (ENFA) → closures → subset construction → StateGraph (DFA)
//! ```

mod build;
mod dump;


pub use build::{Edge, Fragment, Label, StateGraph, StateId};
pub use dump::GraphPrinter;
