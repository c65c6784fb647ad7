use kleene_lib::{Error, compile};

use super::pattern_loader::LoadedPattern;
use super::run_common::render_error;

fn loaded(source: &str, path: Option<&str>) -> LoadedPattern {
    LoadedPattern {
        source: source.to_string(),
        path: path.map(str::to_string),
    }
}

#[test]
fn parse_error_from_argument_renders_snippet() {
    let err = compile("a)").unwrap_err();

    let rendered = render_error(&err, &loaded("a)", None), false);

    insta::assert_snapshot!(rendered.trim_end(), @r"
    error: unmatched `)`
      |
    1 | a)
      |  ^
    ");
    assert!(rendered.ends_with('\n'));
}

#[test]
fn parse_error_from_file_names_the_file() {
    let err = compile("a)").unwrap_err();

    let rendered = render_error(&err, &loaded("a)", Some("pattern.txt")), false);

    assert!(rendered.starts_with("error: unmatched `)`\n"));
    assert!(rendered.contains("--> pattern.txt:1:"));
    assert!(rendered.ends_with('\n'));
}

#[test]
fn colors_only_when_asked() {
    let err = compile("(a").unwrap_err();
    let source = loaded("(a", None);

    assert!(render_error(&err, &source, true).contains('\x1b'));
    assert!(!render_error(&err, &source, false).contains('\x1b'));
}

#[test]
fn other_errors_are_one_line() {
    let rendered = render_error(&Error::StateLimitExceeded(2), &loaded("(a|b)*abb", None), true);

    assert_eq!(rendered, "error: DFA state limit of 2 exceeded\n");
}
