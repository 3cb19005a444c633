//! Tests for [`MatchOutcome`].

use crate::{MatchOutcome, Matcher};

#[test]
fn outcome_accessors_reflect_fields() {
    let outcome = MatchOutcome::new(4, vec![String::from("ab"), String::from("cd")]);
    assert_eq!(outcome.end(), 4);
    assert_eq!(outcome.captures(), ["ab", "cd"]);
    assert_eq!(outcome.consumed(), "abcd");
    assert!(outcome.reaches_end("abcd"));
    assert!(!outcome.reaches_end("abcde"));
    assert_eq!(outcome.into_captures(), ["ab", "cd"]);
}

#[test]
fn captures_reconstruct_consumed_prefix() {
    let matcher = Matcher::literal("x")
        .then(Matcher::greedy())
        .then(Matcher::char_set("yz".chars()).expect("set"));
    let text = "xabyzq";
    let outcome = matcher.first_match(text).expect("match");
    assert_eq!(text.get(..outcome.end()), Some(outcome.consumed().as_str()));
}

#[test]
fn outcome_serializes_to_json() {
    let outcome = MatchOutcome::new(3, vec![String::from("ab"), String::from("c")]);
    let json = serde_json::to_string(&outcome).expect("serialize");
    insta::assert_snapshot!(json, @r#"{"end":3,"captures":["ab","c"]}"#);
    let back: MatchOutcome = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, outcome);
}

#[test]
fn matcher_serializes_as_a_chain() {
    let matcher = Matcher::literal("a")
        .then(Matcher::char_range('0', '9').expect("range"))
        .then(Matcher::lazy());
    let json = serde_json::to_string(&matcher).expect("serialize");
    insta::assert_snapshot!(
        json,
        @r#"{"node":{"kind":{"kind":"literal","value":"a"},"next":{"node":{"kind":{"kind":"char_range","value":{"low":"0","high":"9"}},"next":{"node":{"kind":{"kind":"wildcard","value":"lazy"},"next":"empty"}}}}}}"#
    );
}
