//! Trace the DFA matcher for debugging.

use std::path::PathBuf;

use kleene_lib::{Colors, Limits, PrintTracer, Verbosity};

use super::run_common::{PatternInput, prepare_automaton};

pub struct TraceArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub texts: Vec<String>,
    pub verbosity: Verbosity,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let automaton = prepare_automaton(
        PatternInput {
            pattern: args.pattern.as_deref(),
            pattern_file: args.pattern_file.as_deref(),
            limits: args.limits,
            color: args.color,
        },
        2,
    );

    let text = match single_text(args.texts) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(2);
        }
    };

    let mut tracer = PrintTracer::new(automaton.dfa(), args.verbosity, Colors::new(args.color));
    let accepted = automaton.matches_traced(&text, &mut tracer);
    tracer.print();

    if !accepted {
        std::process::exit(1);
    }
}

/// The one text to trace. With `-p`, the pattern positional becomes a text
/// too, so two texts can arrive here.
pub fn single_text(texts: Vec<String>) -> Result<String, String> {
    let count = texts.len();
    let mut texts = texts.into_iter();
    match (texts.next(), count) {
        (Some(text), 1) => Ok(text),
        (None, _) => Err("text is required".to_string()),
        _ => Err(format!("trace takes exactly one text, got {}", count)),
    }
}
