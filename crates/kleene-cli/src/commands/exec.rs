//! Match texts against a pattern.

use std::path::PathBuf;

use kleene_lib::{Colors, Limits};

use super::run_common::{PatternInput, prepare_automaton};

pub struct ExecArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub texts: Vec<String>,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let automaton = prepare_automaton(
        PatternInput {
            pattern: args.pattern.as_deref(),
            pattern_file: args.pattern_file.as_deref(),
            limits: args.limits,
            color: args.color,
        },
        2,
    );

    if args.texts.is_empty() {
        eprintln!("error: at least one text is required");
        std::process::exit(2);
    }

    let colors = Colors::new(args.color);
    let mut all_matched = true;

    for text in &args.texts {
        if automaton.matches(text) {
            println!("{}match{}", colors.green, colors.reset);
        } else {
            println!("{}no match{}", colors.dim, colors.reset);
            all_matched = false;
        }
    }

    if !all_matched {
        std::process::exit(1);
    }
}
