use crate::{Automaton, Compiler, Error, Limits, ParseErrorKind, compile};

fn automaton(pattern: &str) -> Automaton {
    compile(pattern).expect("valid pattern")
}

fn parse_error(pattern: &str) -> (ParseErrorKind, usize) {
    let err = compile(pattern).expect_err("invalid pattern");
    let parse = err.as_parse_error().expect("parse error");
    (parse.kind, parse.offset())
}

#[test]
fn literal_matches_only_itself() {
    let a = automaton("hello");

    assert!(a.matches("hello"));
    for text in ["", "hell", "hello!", "Hello", "hellohello"] {
        assert!(!a.matches(text), "{text:?}");
    }
}

#[test]
fn star() {
    let a = automaton("a*");

    assert!(a.matches(""));
    assert!(a.matches("aaaa"));
    assert!(!a.matches("ab"));
}

#[test]
fn alternation() {
    let a = automaton("b|a");

    assert!(a.matches("a"));
    assert!(a.matches("b"));
    assert!(!a.matches("c"));
    assert!(!a.matches(""));
}

#[test]
fn plus() {
    let a = automaton("a+");

    assert!(!a.matches(""));
    assert!(a.matches("a"));
    assert!(a.matches("aaa"));
}

#[test]
fn optional_in_middle() {
    let a = automaton("ab?c");

    assert!(a.matches("ac"));
    assert!(a.matches("abc"));
    assert!(!a.matches("abbc"));
}

#[test]
fn grouped_star() {
    let a = automaton("(ab)*");

    assert!(a.matches(""));
    assert!(a.matches("abab"));
    assert!(!a.matches("aba"));
}

#[test]
fn escaped_star() {
    let a = automaton(r"a\*b");

    assert!(a.matches("a*b"));
    assert!(!a.matches("ab"));
    assert!(!a.matches("aab"));
}

#[test]
fn escape_takes_one_char() {
    let a = automaton(r"\ab");

    assert!(a.matches("ab"));
    assert!(!a.matches(r"\ab"));
}

#[test]
fn chained_postfixes() {
    let a = automaton("a+?");

    assert!(a.matches(""));
    assert!(a.matches("aaa"));

    let a = automaton("a?+");
    assert!(a.matches(""));
    assert!(a.matches("aa"));
}

#[test]
fn unmatched_paren() {
    assert_eq!(parse_error("(a"), (ParseErrorKind::UnmatchedParen, 0));
}

#[test]
fn stray_close_paren() {
    assert_eq!(parse_error("a)"), (ParseErrorKind::TrailingInput, 1));
}

#[test]
fn rendered_error() {
    let err = compile("a)").unwrap_err();
    let rendered = err.as_parse_error().unwrap().render("a)");

    insta::assert_snapshot!(rendered, @r"
    error: unmatched `)`
      |
    1 | a)
      |  ^
    ");
}

#[test]
fn error_display() {
    let err = compile("(a").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"missing closing `)` at offset 0");
    insta::assert_snapshot!(Error::StateLimitExceeded(5).to_string(), @"DFA state limit of 5 exceeded");
}

#[test]
fn limits_defaults() {
    let limits = Limits::new();

    assert_eq!(limits.get_max_dfa_states(), 10_000);
    assert_eq!(limits.get_recursion_limit(), 512);
}

#[test]
fn state_limit() {
    let compiler = Compiler::new().limits(Limits::new().max_dfa_states(2));

    assert_eq!(compiler.compile("ab").unwrap_err(), Error::StateLimitExceeded(2));
    assert!(compiler.compile("a").is_ok());
}

#[test]
fn recursion_limit() {
    let compiler = Compiler::new().limits(Limits::new().recursion_limit(2));

    assert!(compiler.compile("((a))").is_ok());
    assert_eq!(
        compiler.compile("(((a)))").unwrap_err(),
        Error::RecursionLimitExceeded
    );
}

#[test]
fn nesting_at_default_limit_fits_spawned_thread_stack() {
    fn nested(depth: usize) -> String {
        format!("{}a{}", "(".repeat(depth), ")".repeat(depth))
    }

    let depth = Limits::new().get_recursion_limit() as usize;
    let handle = std::thread::spawn(move || {
        let deepest = compile(&nested(depth)).map(|a| a.matches("a"));
        let too_deep = compile(&nested(depth + 1)).map(|_| ());
        (deepest, too_deep)
    });
    let (deepest, too_deep) = handle.join().expect("thread panicked");

    assert_eq!(deepest, Ok(true));
    assert_eq!(too_deep, Err(Error::RecursionLimitExceeded));
}

#[test]
fn introspection() {
    let a = automaton("b|a");

    assert_eq!(a.pattern(), "b|a");
    assert_eq!(a.enfa_state_count(), 6);
    assert_eq!(a.dfa_state_count(), 3);
    assert_eq!(a.stats().transitions, 2);
    assert_eq!(a.dfa().final_states().len(), 2);
    assert_eq!(a.enfa().end(), 5);
}

#[test]
fn deterministic_across_corpus() {
    for pattern in ["", "a", "(a|b)*abb", "a?b?c?", "((a|b)+)*c", "(ab|a)(bc|c)"] {
        assert!(automaton(pattern).dfa().is_deterministic(), "{pattern}");
    }
}

#[test]
fn shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Automaton>();

    let a = std::sync::Arc::new(automaton("(ab)+"));
    let handles: Vec<_> = ["ab", "abab", "aba"]
        .into_iter()
        .map(|text| {
            let a = a.clone();
            std::thread::spawn(move || a.matches(text))
        })
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results, [true, true, false]);
}
