//! Tests for structural equality and hashing.

use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

use rstest::rstest;

use crate::Matcher;

fn digest(matcher: &Matcher) -> u64 {
    let mut hasher = DefaultHasher::new();
    matcher.hash(&mut hasher);
    hasher.finish()
}

fn alternation(options: &[&str]) -> Matcher {
    Matcher::alternation(options.iter().copied().map(Matcher::literal)).expect("alternation")
}

#[test]
fn identical_chains_are_equal() {
    let left = Matcher::literal("a").then(Matcher::lazy()).then(Matcher::literal("c"));
    let right = Matcher::literal("a").then(Matcher::lazy()).then(Matcher::literal("c"));
    assert_eq!(left, right);
    assert_eq!(digest(&left), digest(&right));
}

#[rstest]
#[case(Matcher::literal("a"), Matcher::literal("b"))]
#[case(Matcher::lazy(), Matcher::greedy())]
#[case(Matcher::lazy(), Matcher::one_or_more())]
#[case(
    Matcher::char_set(['a']).expect("set"),
    Matcher::negated_char_set(['a'])
)]
#[case(
    Matcher::char_range('a', 'c').expect("range"),
    Matcher::char_range('a', 'd').expect("range")
)]
#[case(
    Matcher::literal("a"),
    Matcher::literal("a").then(Matcher::literal("b"))
)]
#[case(
    Matcher::not(Matcher::literal("a")),
    Matcher::not(Matcher::literal("b"))
)]
#[case(Matcher::Empty, Matcher::literal(""))]
fn different_chains_are_unequal(#[case] left: Matcher, #[case] right: Matcher) {
    assert_ne!(left, right);
}

#[test]
fn char_sets_compare_as_sets() {
    let left = Matcher::char_set("abca".chars()).expect("set");
    let right = Matcher::char_set("cba".chars()).expect("set");
    assert_eq!(left, right);
    assert_eq!(digest(&left), digest(&right));
}

#[test]
fn alternation_ignores_order() {
    let left = alternation(&["a", "b", "c"]);
    let right = alternation(&["c", "a", "b"]);
    assert_eq!(left, right);
    assert_eq!(digest(&left), digest(&right));
}

#[rstest]
#[case(&["a", "a", "b"], &["a", "b", "b"])]
#[case(&["a", "b"], &["a", "b", "b"])]
#[case(&["a"], &["b"])]
fn alternation_compares_multiplicity(#[case] left: &[&str], #[case] right: &[&str]) {
    assert_ne!(alternation(left), alternation(right));
}

#[test]
fn alternation_tails_take_part_in_equality() {
    let left = alternation(&["a", "b"]).then(Matcher::literal("c"));
    let right = alternation(&["b", "a"]).then(Matcher::literal("d"));
    assert_ne!(left, right);
}

#[test]
fn reordered_alternations_collapse_in_a_hash_set() {
    let set: HashSet<Matcher> = [
        alternation(&["x", "y"]),
        alternation(&["y", "x"]),
        alternation(&["x", "z"]),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 2);
}
