//! Flat-sequence driver.
//!
//! [`Sequence`] holds independent matchers in a list and links them at match
//! time, so no item needs to know what follows it. Each item is resumed with
//! a callback into the next one; the last item sees [`Continuation::Accept`]
//! so it behaves exactly as the tail of an embedded chain would.

use crate::continuation::Continuation;
use crate::matcher::Matcher;
use crate::outcome::MatchOutcome;

/// An ordered list of matchers evaluated one after another.
///
/// # Example
///
/// ```
/// use motif_core::{Matcher, Sequence};
///
/// let sequence: Sequence = [Matcher::literal("a"), Matcher::greedy(), Matcher::literal("c")]
///     .into_iter()
///     .collect();
/// let outcome = sequence.first_match("abcbc").expect("should match");
/// assert_eq!(outcome.captures(), ["a", "bcb", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<Matcher>,
}

impl Sequence {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends `matcher` to the end of the sequence.
    pub fn push(&mut self, matcher: Matcher) {
        self.items.push(matcher);
    }

    /// Returns the number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sequence has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the items in order.
    #[must_use]
    pub fn items(&self) -> &[Matcher] {
        &self.items
    }

    /// Matches a prefix of `text`.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<MatchOutcome> {
        self.match_item(0, text, 0)
    }

    /// Returns `true` when the sequence consumes the whole of `text`.
    #[must_use]
    pub fn is_full_match(&self, text: &str) -> bool {
        self.first_match(text)
            .is_some_and(|outcome| outcome.reaches_end(text))
    }

    /// Links the items into a single embedded chain.
    #[must_use]
    pub fn into_matcher(self) -> Matcher {
        Matcher::sequence(self.items)
    }

    fn match_item(&self, index: usize, text: &str, start: usize) -> Option<MatchOutcome> {
        let Some(item) = self.items.get(index) else {
            return Some(MatchOutcome::at(start));
        };
        let following = index.saturating_add(1);
        if following >= self.items.len() {
            return item.try_match(text, start, &Continuation::Accept);
        }
        let resume = |position: usize| self.match_item(following, text, position);
        item.try_match(text, start, &Continuation::Callback(&resume))
    }
}

impl FromIterator<Matcher> for Sequence {
    fn from_iter<I: IntoIterator<Item = Matcher>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Matcher> for Sequence {
    fn extend<I: IntoIterator<Item = Matcher>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl From<Sequence> for Matcher {
    fn from(sequence: Sequence) -> Self {
        sequence.into_matcher()
    }
}
