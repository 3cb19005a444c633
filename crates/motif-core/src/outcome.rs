//! Match outcome and capture ledger.
//!
//! A [`MatchOutcome`] records where a successful match stopped and the
//! substring each participating matcher consumed, in chain order.

use serde::{Deserialize, Serialize};

/// The result of a successful match attempt.
///
/// `end` is an absolute byte offset into the matched text and always falls on
/// a `char` boundary. `captures` holds one entry per capturing matcher on the
/// successful path.
///
/// # Example
///
/// ```
/// use motif_core::Matcher;
///
/// let matcher = Matcher::literal("a")
///     .then(Matcher::lazy())
///     .then(Matcher::literal("c"));
/// let outcome = matcher.first_match("abc").expect("should match");
/// assert_eq!(outcome.end(), 3);
/// assert_eq!(outcome.captures(), ["a", "b", "c"]);
/// assert_eq!(outcome.consumed(), "abc");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchOutcome {
    end: usize,
    captures: Vec<String>,
}

impl MatchOutcome {
    /// Creates an outcome from an end offset and its captures.
    #[must_use]
    pub const fn new(end: usize, captures: Vec<String>) -> Self {
        Self { end, captures }
    }

    /// Creates an outcome with no captures, as produced by the terminal
    /// continuation.
    #[must_use]
    pub const fn at(end: usize) -> Self {
        Self {
            end,
            captures: Vec::new(),
        }
    }

    /// Returns the byte offset reached by the match.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the captured substrings.
    #[must_use]
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    /// Consumes the outcome, returning the captured substrings.
    #[must_use]
    pub fn into_captures(self) -> Vec<String> {
        self.captures
    }

    /// Returns the concatenation of every capture.
    ///
    /// For a match started at offset zero this reconstructs the consumed
    /// prefix of the input.
    #[must_use]
    pub fn consumed(&self) -> String {
        self.captures.concat()
    }

    /// Returns `true` when the match stopped exactly at the end of `text`.
    #[must_use]
    pub const fn reaches_end(&self, text: &str) -> bool {
        self.end == text.len()
    }

    /// Records `capture` ahead of everything captured downstream.
    pub(crate) fn prepend(mut self, capture: impl Into<String>) -> Self {
        self.captures.insert(0, capture.into());
        self
    }
}
