//! What remains to be matched after a chain finishes.

use std::fmt;

use crate::matcher::Matcher;
use crate::outcome::MatchOutcome;

/// The pending work handed to a matcher together with its start position.
///
/// A continuation is resumed with the position a chain reached. It returns
/// the outcome of everything still to be matched, or `None` to make the
/// caller backtrack.
///
/// # Example
///
/// ```
/// use motif_core::{Continuation, MatchOutcome, Matcher};
///
/// let only_at_two = |position: usize| (position == 2).then(|| MatchOutcome::at(position));
/// let outcome = Matcher::lazy()
///     .try_match("abcd", 0, &Continuation::Callback(&only_at_two))
///     .expect("should stop at two");
/// assert_eq!(outcome.captures(), ["ab"]);
/// ```
#[derive(Clone, Copy)]
pub enum Continuation<'a> {
    /// Succeeds at any position without capturing.
    Accept,
    /// Runs `next`, then `after`.
    Chain {
        /// The chain to match first.
        next: &'a Matcher,
        /// What must match once `next` succeeds.
        after: &'a Continuation<'a>,
    },
    /// Defers to caller code.
    Callback(&'a dyn Fn(usize) -> Option<MatchOutcome>),
}

impl Continuation<'_> {
    /// Resumes matching at `position`.
    #[must_use]
    pub fn resume(&self, text: &str, position: usize) -> Option<MatchOutcome> {
        match self {
            Self::Accept => Some(MatchOutcome::at(position)),
            Self::Chain { next, after } => next.try_match(text, position, after),
            Self::Callback(callback) => callback(position),
        }
    }

    /// Returns `true` when resuming succeeds at every position without
    /// capturing anything.
    pub(crate) const fn is_trivial(&self) -> bool {
        match self {
            Self::Accept => true,
            Self::Chain { next, after } => next.is_empty() && after.is_trivial(),
            Self::Callback(_) => false,
        }
    }
}

impl fmt::Debug for Continuation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => f.write_str("Accept"),
            Self::Chain { next, after } => f
                .debug_struct("Chain")
                .field("next", next)
                .field("after", after)
                .finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}
