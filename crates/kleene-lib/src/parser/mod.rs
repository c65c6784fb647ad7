//! Pattern parser.
//!
//! # Architecture
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only for literals
//! - One token of lookahead; no backtracking
//! - Direct construction: productions add states to the graph as they
//!   recognize input, no intermediate syntax tree
//!
//! The first error stops the parse. Recursion fuel bounds group nesting.

pub mod lexer;

mod core;
mod grammar;


pub use core::Parser;

use crate::Result;
use crate::graph::{Fragment, StateGraph};
use lexer::lex;

/// Parse `source` into `graph`, returning the fragment for the whole pattern.
pub fn parse(source: &str, graph: &mut StateGraph) -> Result<Fragment> {
    Parser::new(source, lex(source), graph).parse()
}

/// Parse with a bound on group nesting depth.
pub fn parse_with_recursion_limit(
    source: &str,
    graph: &mut StateGraph,
    limit: Option<u32>,
) -> Result<Fragment> {
    Parser::new(source, lex(source), graph)
        .with_recursion_fuel(limit)
        .parse()
}
