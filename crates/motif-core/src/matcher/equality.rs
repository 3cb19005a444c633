//! Structural equality for matcher trees.
//!
//! Alternatives are compared as an unordered bag: two alternations are equal
//! when each alternative occurs the same number of times in both. Hashing
//! follows suit by combining per-alternative digests in sorted order.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::mem;

use super::{Matcher, NodeKind};

impl PartialEq for NodeKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(left), Self::Literal(right)) => left == right,
            (Self::Wildcard(left), Self::Wildcard(right)) => left == right,
            (Self::Alternation(left), Self::Alternation(right)) => same_bag(left, right),
            (Self::OneOrMore, Self::OneOrMore) => true,
            (Self::CharSet(left), Self::CharSet(right))
            | (Self::NegatedCharSet(left), Self::NegatedCharSet(right)) => left == right,
            (
                Self::CharRange { low, high },
                Self::CharRange {
                    low: other_low,
                    high: other_high,
                },
            ) => low == other_low && high == other_high,
            (Self::NegativeAssertion(left), Self::NegativeAssertion(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for NodeKind {}

impl Hash for NodeKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            Self::Literal(pattern) => pattern.hash(state),
            Self::Wildcard(repetition) => repetition.hash(state),
            Self::Alternation(alternatives) => {
                let mut digests: Vec<u64> = alternatives.iter().map(digest).collect();
                digests.sort_unstable();
                digests.hash(state);
            }
            Self::OneOrMore => {}
            Self::CharSet(set) | Self::NegatedCharSet(set) => set.hash(state),
            Self::CharRange { low, high } => {
                low.hash(state);
                high.hash(state);
            }
            Self::NegativeAssertion(inner) => inner.hash(state),
        }
    }
}

fn same_bag(left: &[Matcher], right: &[Matcher]) -> bool {
    let count = |items: &[Matcher], item: &Matcher| items.iter().filter(|x| *x == item).count();
    left.len() == right.len() && left.iter().all(|item| count(left, item) == count(right, item))
}

fn digest(matcher: &Matcher) -> u64 {
    let mut hasher = DefaultHasher::new();
    matcher.hash(&mut hasher);
    hasher.finish()
}
