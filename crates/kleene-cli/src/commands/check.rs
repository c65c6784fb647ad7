use std::path::PathBuf;

use kleene_lib::Limits;

use super::run_common::{PatternInput, prepare_automaton};

pub struct CheckArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    prepare_automaton(
        PatternInput {
            pattern: args.pattern.as_deref(),
            pattern_file: args.pattern_file.as_deref(),
            limits: args.limits,
            color: args.color,
        },
        1,
    );

    // Silent on success (like cargo check)
}
