use indoc::indoc;

use super::{Dfa, Enfa, determinize};

fn dfa(pattern: &str) -> Dfa {
    let enfa = Enfa::parse(pattern).expect("valid pattern");
    determinize(&enfa, None).expect("within limits").0
}

#[test]
fn whole_string_semantics() {
    let dfa = dfa("ab");

    assert!(dfa.matches("ab"));
    assert!(!dfa.matches("a"));
    assert!(!dfa.matches("abb"));
    assert!(!dfa.matches("xab"));
    assert!(!dfa.matches(""));
}

#[test]
fn empty_pattern_matches_only_empty_text() {
    let dfa = dfa("");

    assert!(dfa.matches(""));
    assert!(!dfa.matches("a"));
}

#[test]
fn quantifiers() {
    let star = dfa("a*");
    assert!(star.matches(""));
    assert!(star.matches("aaaa"));
    assert!(!star.matches("ab"));

    let plus = dfa("a+");
    assert!(!plus.matches(""));
    assert!(plus.matches("a"));
    assert!(plus.matches("aaa"));

    let optional = dfa("ab?");
    assert!(optional.matches("a"));
    assert!(optional.matches("ab"));
    assert!(!optional.matches("abb"));
}

#[test]
fn grouped_repetition() {
    let dfa = dfa("(ab)*c?");

    for text in ["", "ab", "abab", "c", "abc", "ababc"] {
        assert!(dfa.matches(text), "{text:?}");
    }
    for text in ["a", "aba", "cc", "abca", "ba"] {
        assert!(!dfa.matches(text), "{text:?}");
    }
}

#[test]
fn multibyte_characters() {
    let dfa = dfa("(é|ü)+ß");

    assert!(dfa.matches("éüéß"));
    assert!(!dfa.matches("eß"));
}

#[test]
fn transition_lookup() {
    let dfa = dfa("b|a");

    assert_eq!(dfa.transition(Dfa::INITIAL, 'a'), Some(1));
    assert_eq!(dfa.transition(Dfa::INITIAL, 'b'), Some(2));
    assert_eq!(dfa.transition(Dfa::INITIAL, 'c'), None);
    assert_eq!(dfa.transition(1, 'a'), None);
}

#[test]
fn agrees_with_enfa_simulation() {
    let patterns = ["(a|b)*abb", "a?b+|ba*", "((ab)*|c)+", "(a|ab)(c|bcd)"];
    let texts = ["", "a", "b", "ab", "abb", "aabb", "babb", "ba", "c", "abc", "abcd", "abcab"];

    for pattern in patterns {
        let enfa = Enfa::parse(pattern).unwrap();
        let (dfa, _) = determinize(&enfa, None).unwrap();
        for text in texts {
            assert_eq!(dfa.matches(text), enfa.accepts(text), "{pattern} on {text:?}");
        }
    }
}

#[test]
fn redeterminize_is_identity() {
    for pattern in ["b|a", "a*", "(a|b)*abb", "(ab|a)(bc|c)", ""] {
        let dfa = dfa(pattern);
        let (again, stats) = dfa.determinize(None).unwrap();

        assert_eq!(again, dfa, "{pattern}");
        assert_eq!(stats.subsets, dfa.len());
    }
}

#[test]
fn enfa_dump_header() {
    let enfa = Enfa::parse("a|b").unwrap();

    insta::assert_snapshot!(enfa.dump(), @r"
    start S4, end S5
    S0: 'a' → S1
    S1: ε → S5
    S2: 'b' → S3
    S3: ε → S5
    S4: ε → S0, ε → S2
    S5: ∅ ✓
    ");
}

#[test]
fn serializes_to_json() {
    let json = serde_json::to_string(&dfa("a")).unwrap();

    assert_eq!(
        json,
        indoc! {r#"
            {"graph":[[{"label":{"Char":"a"},"target":1}],[]],"final_states":[1],"subsets":[[0],[1]]}
        "#}
        .trim_end()
    );
}
