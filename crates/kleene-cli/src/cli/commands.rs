//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`. Every
//! command compiles a pattern, so all of them take the limit flags. The
//! pattern positional is added first so it always comes before texts.

use clap::Command;

use super::args::*;

/// Add pattern input and compile limits.
fn with_pattern_args(cmd: Command) -> Command {
    cmd.arg(pattern_arg())
        .arg(pattern_file_arg())
        .arg(max_states_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kleene")
        .about("Compile minimal regular expressions to DFAs and match whole strings")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  kleene check <PATTERN>
  kleene check -p <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  kleene check '(ab)*c?'          # silent on success
  kleene check 'a)'               # prints the error, exits 1
  kleene check -p pattern.txt     # pattern from a file"#,
        );

    with_pattern_args(cmd)
}

/// Show the compiled automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled automaton")
        .override_usage(
            "\
  kleene dump [PATTERN] [--enfa] [--subsets] [--json]
  kleene dump -p <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  kleene dump                     # DFA of 'b|a'
  kleene dump 'a*b' --enfa        # epsilon-NFA with start/end
  kleene dump 'a|ab' --subsets    # DFA plus the ENFA states behind each state
  kleene dump 'a+' --json         # serialized DFA"#,
        );

    with_pattern_args(cmd)
        .arg(enfa_arg())
        .arg(subsets_arg())
        .arg(json_arg())
}

/// Match texts against a pattern.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Match texts against a pattern")
        .override_usage(
            "\
  kleene exec <PATTERN> <TEXT>...
  kleene exec -p <FILE> <TEXT>...",
        )
        .after_help(
            r#"EXAMPLES:
  kleene exec 'a*' '' aaa ab      # one verdict per text
  kleene exec -p pattern.txt abc  # pattern from a file

EXIT STATUS:
  0 every text matched, 1 some text did not, 2 the pattern failed to compile"#,
        );

    with_pattern_args(cmd).arg(texts_arg())
}

/// Trace the matcher on one text.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace the DFA matcher for debugging")
        .override_usage(
            "\
  kleene trace <PATTERN> <TEXT> [-v|-vv]
  kleene trace -p <FILE> <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  kleene trace '(ab)*' abab       # one line per transition
  kleene trace '(ab)*' abab -v    # with byte offsets
  kleene trace 'a|ab' ab -vv      # with ENFA subsets"#,
        );

    with_pattern_args(cmd).arg(text_arg()).arg(verbose_arg())
}
