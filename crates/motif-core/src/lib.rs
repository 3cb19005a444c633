//! Core matcher model and backtracking engine for the motif pattern matcher.
//!
//! A pattern is a chain of [`Matcher`] nodes: literals, lazy or greedy
//! wildcards, ordered alternation, one-or-more runs, character sets and
//! ranges, negated sets and zero-width negative assertions. Matching walks
//! the chain with an explicit [`Continuation`], backtracking over candidate
//! splits and recording the substring each node consumed in a
//! [`MatchOutcome`].
//!
//! # Core types
//!
//! - [`Matcher`], [`Node`], [`NodeKind`] and [`Repetition`] describe patterns
//! - [`Continuation`] is the pending work resumed after a chain finishes
//! - [`MatchOutcome`] and [`Found`] report successful matches
//! - [`Sequence`] links a flat list of independent matchers at match time
//! - [`BuildError`] reports malformed matcher parameters
//!
//! # Example
//!
//! ```
//! use motif_core::Matcher;
//!
//! let matcher = Matcher::literal("a").then(Matcher::greedy()).then(Matcher::literal("c"));
//! let outcome = matcher.first_match("abccccd").expect("should match");
//! assert_eq!(outcome.end(), 6);
//! assert_eq!(outcome.captures(), ["a", "bccc", "c"]);
//! ```

mod continuation;
mod error;
mod matcher;
mod outcome;
mod sequence;

pub use continuation::Continuation;
pub use error::BuildError;
pub use matcher::{Found, Matcher, Node, NodeKind, Repetition};
pub use outcome::MatchOutcome;
pub use sequence::Sequence;

#[cfg(test)]
mod tests;
