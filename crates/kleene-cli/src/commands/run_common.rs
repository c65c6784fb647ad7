//! Shared pattern loading and compilation for all commands.

use std::path::Path;

use kleene_lib::{Automaton, Compiler, Error, Limits};

use super::pattern_loader::{LoadedPattern, load_pattern};

pub struct PatternInput<'a> {
    pub pattern: Option<&'a str>,
    pub pattern_file: Option<&'a Path>,
    pub limits: Limits,
    pub color: bool,
}

/// Load and compile a pattern, exiting with `exit_code` on failure.
pub fn prepare_automaton(input: PatternInput<'_>, exit_code: i32) -> Automaton {
    let loaded = match load_pattern(input.pattern, input.pattern_file) {
        Ok(loaded) => loaded,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(exit_code);
        }
    };

    match Compiler::new().limits(input.limits).compile(&loaded.source) {
        Ok(automaton) => automaton,
        Err(err) => {
            eprint!("{}", render_error(&err, &loaded, input.color));
            std::process::exit(exit_code);
        }
    }
}

/// Render a compile error: a snippet for syntax errors, one line otherwise.
pub fn render_error(err: &Error, loaded: &LoadedPattern, color: bool) -> String {
    let Some(parse) = err.as_parse_error() else {
        return format!("error: {}\n", err);
    };

    let rendered = match &loaded.path {
        Some(path) => parse.printer(&loaded.source).colored(color).path(path).render(),
        None => parse.render_colored(&loaded.source, color),
    };
    rendered + "\n"
}
