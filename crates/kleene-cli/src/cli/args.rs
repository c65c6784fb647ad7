//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so every command spells a flag the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern text (positional).
pub fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .value_name("PATTERN")
        .help("Pattern to compile")
}

/// Read the pattern from a file (-p/--pattern-file).
pub fn pattern_file_arg() -> Arg {
    Arg::new("pattern_file")
        .short('p')
        .long("pattern-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the pattern from FILE ('-' for stdin)")
}

/// Texts to match (positional, repeatable).
pub fn texts_arg() -> Arg {
    Arg::new("texts")
        .value_name("TEXT")
        .num_args(0..)
        .action(ArgAction::Append)
        .help("Texts to match against the whole pattern")
}

/// Single text to trace (positional).
pub fn text_arg() -> Arg {
    Arg::new("text")
        .value_name("TEXT")
        .help("Text to run through the matcher")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// DFA state cap (--max-states).
pub fn max_states_arg() -> Arg {
    Arg::new("max_states")
        .long("max-states")
        .value_name("N")
        .default_value("10000")
        .value_parser(value_parser!(u32))
        .help("Maximum number of DFA states")
}

/// Group nesting cap (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("512")
        .value_parser(value_parser!(u32))
        .help("Maximum group nesting depth")
}

/// Dump the ENFA instead of the DFA (--enfa).
pub fn enfa_arg() -> Arg {
    Arg::new("enfa")
        .long("enfa")
        .action(ArgAction::SetTrue)
        .help("Show the epsilon-NFA instead of the DFA")
}

/// Append closures or subsets (--subsets).
pub fn subsets_arg() -> Arg {
    Arg::new("subsets")
        .long("subsets")
        .action(ArgAction::SetTrue)
        .help("Also list ENFA closures or DFA subsets")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output the automaton as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for offsets, -vv for subsets)")
}
