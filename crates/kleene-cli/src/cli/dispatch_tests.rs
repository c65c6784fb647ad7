//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Params extraction: correct fields are extracted from ArgMatches
//! 2. Positional shifting: -p turns the pattern positional into a text
//! 3. Defaults and validation of shared flags

use std::path::PathBuf;

use kleene_lib::Verbosity;

use super::*;
use crate::cli::commands::{check_command, dump_command, exec_command, trace_command};
use crate::commands::exec::ExecArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn cli_definition_is_valid() {
    build_cli().debug_assert();
}

#[test]
fn check_extracts_pattern() {
    let m = check_command()
        .try_get_matches_from(["check", "(ab)*"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("(ab)*"));
    assert_eq!(params.pattern_file, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_pattern_file() {
    let m = check_command()
        .try_get_matches_from(["check", "-p", "pattern.txt"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.pattern_file, Some(PathBuf::from("pattern.txt")));
}

#[test]
fn limit_defaults() {
    let m = check_command().try_get_matches_from(["check", "a"]).unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.max_states, 10_000);
    assert_eq!(params.recursion_limit, 512);
}

#[test]
fn limit_flags() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a", "--max-states", "5", "--recursion-limit", "3"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.max_states, 5);
    assert_eq!(params.recursion_limit, 3);
}

#[test]
fn limit_must_be_a_number() {
    let result = exec_command().try_get_matches_from(["exec", "a", "a", "--max-states", "many"]);

    assert!(result.is_err());
}

#[test]
fn color_values() {
    let m = check_command()
        .try_get_matches_from(["check", "a", "--color", "never"])
        .unwrap();
    assert_eq!(CheckParams::from_matches(&m).color, ColorChoice::Never);

    let m = check_command()
        .try_get_matches_from(["check", "a", "--color", "always"])
        .unwrap();
    assert!(CheckParams::from_matches(&m).color.should_colorize());

    let result = check_command().try_get_matches_from(["check", "a", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn dump_without_pattern() {
    let m = dump_command().try_get_matches_from(["dump"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert!(!params.enfa);
    assert!(!params.json);
}

#[test]
fn dump_flags() {
    let m = dump_command()
        .try_get_matches_from(["dump", "a|b", "--enfa", "--subsets", "--json"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("a|b"));
    assert!(params.enfa);
    assert!(params.subsets);
    assert!(params.json);
}

#[test]
fn exec_pattern_and_texts() {
    let m = exec_command()
        .try_get_matches_from(["exec", "a*", "", "aaa", "ab"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("a*"));
    assert_eq!(params.texts, ["", "aaa", "ab"]);
}

#[test]
fn exec_pattern_file_shifts_positional_to_texts() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-p", "pattern.txt", "abc", "abd"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.pattern_file, Some(PathBuf::from("pattern.txt")));
    assert_eq!(params.texts, ["abc", "abd"]);
}

#[test]
fn exec_params_into_args() {
    let m = exec_command()
        .try_get_matches_from(["exec", "a", "a", "--max-states", "7", "--color", "never"])
        .unwrap();
    let args: ExecArgs = ExecParams::from_matches(&m).into();

    assert_eq!(args.limits.get_max_dfa_states(), 7);
    assert!(!args.color);
}

#[test]
fn trace_verbosity() {
    let cases = [
        (vec!["trace", "a", "a"], Verbosity::Default),
        (vec!["trace", "a", "a", "-v"], Verbosity::Verbose),
        (vec!["trace", "a", "a", "-vv"], Verbosity::VeryVerbose),
        (vec!["trace", "a", "a", "-vvv"], Verbosity::VeryVerbose),
    ];

    for (argv, expected) in cases {
        let m = trace_command().try_get_matches_from(argv).unwrap();
        let args: TraceArgs = TraceParams::from_matches(&m).into();
        assert_eq!(args.verbosity, expected);
    }
}

#[test]
fn trace_pattern_file_shifts_positional_to_text() {
    let m = trace_command()
        .try_get_matches_from(["trace", "-p", "pattern.txt", "abab"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.texts, ["abab"]);
}

#[test]
fn trace_pattern_file_keeps_both_positionals() {
    let m = trace_command()
        .try_get_matches_from(["trace", "-p", "pattern.txt", "ab", "abab"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();

    assert_eq!(args.pattern, None);
    assert_eq!(args.texts, ["ab", "abab"]);
}

#[test]
fn trace_rejects_extra_texts() {
    let result = trace_command().try_get_matches_from(["trace", "a", "a", "b"]);

    assert!(result.is_err());
}

#[test]
fn subcommand_required() {
    let result = build_cli().try_get_matches_from(["kleene"]);

    assert!(result.is_err());
}
