use std::path::PathBuf;

use kleene_lib::{Automaton, Colors, Limits};

use super::run_common::{PatternInput, prepare_automaton};

/// Dumped when no pattern is given.
const DEFAULT_PATTERN: &str = "b|a";

pub struct DumpArgs {
    pub pattern: Option<String>,
    pub pattern_file: Option<PathBuf>,
    pub enfa: bool,
    pub subsets: bool,
    pub json: bool,
    pub limits: Limits,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern = match (&args.pattern, &args.pattern_file) {
        (None, None) => Some(DEFAULT_PATTERN),
        (pattern, _) => pattern.as_deref(),
    };

    let automaton = prepare_automaton(
        PatternInput {
            pattern,
            pattern_file: args.pattern_file.as_deref(),
            limits: args.limits,
            color: args.color,
        },
        1,
    );

    if args.json {
        match render_json(&automaton, args.enfa) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_text(&automaton, &args));
}

fn render_json(automaton: &Automaton, enfa: bool) -> serde_json::Result<String> {
    if enfa {
        serde_json::to_string_pretty(automaton.enfa())
    } else {
        serde_json::to_string_pretty(automaton.dfa())
    }
}

fn render_text(automaton: &Automaton, args: &DumpArgs) -> String {
    let colors = Colors::new(args.color);

    let (mut out, extra) = if args.enfa {
        let enfa = automaton.enfa();
        (enfa.dump_colored(colors), enfa.dump_closures())
    } else {
        let dfa = automaton.dfa();
        (dfa.dump_colored(colors), dfa.dump_subsets())
    };

    if args.subsets {
        out.push('\n');
        out.push_str(&extra);
    }
    out
}
