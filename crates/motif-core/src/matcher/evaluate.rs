//! Backtracking evaluation of matcher chains.

use super::{Matcher, NodeKind, Repetition};
use crate::continuation::Continuation;
use crate::outcome::MatchOutcome;

pub(super) fn match_chain(
    matcher: &Matcher,
    text: &str,
    start: usize,
    pending: &Continuation<'_>,
) -> Option<MatchOutcome> {
    match matcher {
        Matcher::Empty => pending.resume(text, start),
        Matcher::Node(node) => {
            let rest = Continuation::Chain {
                next: &node.next,
                after: pending,
            };
            match_node(&node.kind, text, start, &rest)
        }
    }
}

fn match_node(
    kind: &NodeKind,
    text: &str,
    start: usize,
    rest: &Continuation<'_>,
) -> Option<MatchOutcome> {
    match kind {
        NodeKind::Literal(pattern) => {
            let end = start.checked_add(pattern.len())?;
            if text.get(start..end)? != pattern.as_str() {
                return None;
            }
            consume(text, start, end, rest)
        }
        NodeKind::Wildcard(repetition) => wildcard(*repetition, text, start, rest),
        NodeKind::OneOrMore => {
            let first = start.checked_add(next_char(text, start)?.len_utf8())?;
            if rest.is_trivial() {
                return consume(text, start, text.len(), rest);
            }
            candidates(text, first).find_map(|end| consume(text, start, end, rest))
        }
        NodeKind::Alternation(alternatives) => alternatives
            .iter()
            .find_map(|alternative| match_chain(alternative, text, start, rest)),
        NodeKind::CharSet(members) => single_char(text, start, rest, |ch| members.contains(&ch)),
        NodeKind::CharRange { low, high } => {
            single_char(text, start, rest, |ch| (*low..=*high).contains(&ch))
        }
        NodeKind::NegatedCharSet(excluded) => {
            single_char(text, start, rest, |ch| !excluded.contains(&ch))
        }
        NodeKind::NegativeAssertion(inner) => {
            if match_chain(inner, text, start, &Continuation::Accept).is_some() {
                return None;
            }
            rest.resume(text, start)
                .map(|outcome| outcome.prepend(String::new()))
        }
    }
}

fn wildcard(
    repetition: Repetition,
    text: &str,
    start: usize,
    rest: &Continuation<'_>,
) -> Option<MatchOutcome> {
    if !text.is_char_boundary(start) {
        return None;
    }
    if rest.is_trivial() {
        return consume(text, start, text.len(), rest);
    }
    match repetition {
        Repetition::Lazy => candidates(text, start).find_map(|end| consume(text, start, end, rest)),
        Repetition::Greedy => candidates(text, start)
            .rev()
            .find_map(|end| consume(text, start, end, rest)),
    }
}

/// Captures `text[start..end]` once `rest` succeeds from `end`.
fn consume(
    text: &str,
    start: usize,
    end: usize,
    rest: &Continuation<'_>,
) -> Option<MatchOutcome> {
    let slice = text.get(start..end)?;
    rest.resume(text, end).map(|outcome| outcome.prepend(slice))
}

fn single_char(
    text: &str,
    start: usize,
    rest: &Continuation<'_>,
    accepts: impl Fn(char) -> bool,
) -> Option<MatchOutcome> {
    let ch = next_char(text, start)?;
    if !accepts(ch) {
        return None;
    }
    consume(text, start, start.checked_add(ch.len_utf8())?, rest)
}

fn next_char(text: &str, start: usize) -> Option<char> {
    text.get(start..)?.chars().next()
}

/// End positions on `char` boundaries from `from` to the end of `text`.
fn candidates(text: &str, from: usize) -> impl DoubleEndedIterator<Item = usize> + '_ {
    (from..=text.len()).filter(move |&index| text.is_char_boundary(index))
}
