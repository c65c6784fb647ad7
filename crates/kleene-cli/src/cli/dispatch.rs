//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers
//! - Positional shifting for exec/trace (`-p` shifts the pattern positional to the texts)

use std::path::PathBuf;

use clap::ArgMatches;
use kleene_lib::{Limits, Verbosity};

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub max_states: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            max_states: parse_max_states(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            limits: limits(p.max_states, p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub enfa: bool,
    pub subsets: bool,
    pub json: bool,
    pub max_states: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            pattern_file: m.get_one::<PathBuf>("pattern_file").cloned(),
            enfa: m.get_flag("enfa"),
            subsets: m.get_flag("subsets"),
            json: m.get_flag("json"),
            max_states: parse_max_states(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            enfa: p.enfa,
            subsets: p.subsets,
            json: p.json,
            limits: limits(p.max_states, p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub texts: Vec<String>,
    pub max_states: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let texts: Vec<String> = m
            .get_many::<String>("texts")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        // With -p, the first positional is a text, not a pattern.
        let (pattern, texts) = shift_pattern_to_texts(
            pattern_file.is_some(),
            m.get_one::<String>("pattern").cloned(),
            texts,
        );

        Self {
            pattern,
            pattern_file,
            texts,
            max_states: parse_max_states(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            texts: p.texts,
            limits: limits(p.max_states, p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    /// Everything left after shifting; `trace` wants exactly one.
    pub texts: Vec<String>,
    pub verbose: u8,
    pub max_states: u32,
    pub recursion_limit: u32,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_file = m.get_one::<PathBuf>("pattern_file").cloned();
        let text = m.get_one::<String>("text").cloned();

        let (pattern, texts) = shift_pattern_to_texts(
            pattern_file.is_some(),
            m.get_one::<String>("pattern").cloned(),
            text.into_iter().collect(),
        );

        Self {
            pattern,
            pattern_file,
            texts,
            verbose: m.get_count("verbose"),
            max_states: parse_max_states(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        };

        Self {
            pattern: p.pattern,
            pattern_file: p.pattern_file,
            texts: p.texts,
            verbosity,
            limits: limits(p.max_states, p.recursion_limit),
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_max_states(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("max_states")
        .copied()
        .unwrap_or_else(|| Limits::default().get_max_dfa_states())
}

fn parse_recursion_limit(m: &ArgMatches) -> u32 {
    m.get_one::<u32>("recursion_limit")
        .copied()
        .unwrap_or_else(|| Limits::default().get_recursion_limit())
}

fn limits(max_states: u32, recursion_limit: u32) -> Limits {
    Limits::new()
        .max_dfa_states(max_states)
        .recursion_limit(recursion_limit)
}

/// When -p is used, the pattern positional actually holds the first text.
/// This enables: `kleene exec -p pattern.txt abc abd`
fn shift_pattern_to_texts(
    has_pattern_file: bool,
    pattern: Option<String>,
    mut texts: Vec<String>,
) -> (Option<String>, Vec<String>) {
    if !has_pattern_file {
        return (pattern, texts);
    }
    if let Some(first) = pattern {
        texts.insert(0, first);
    }
    (None, texts)
}
