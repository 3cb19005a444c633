//! motif: a backtracking pattern matcher with per-construct captures.
//!
//! This facade crate re-exports the stable types from [`motif_core`] and
//! [`motif_syntax`] and provides [`Pattern`], which compiles the compact
//! syntax once and matches it against any number of inputs.
//!
//! # Stability
//!
//! The `motif` crate is the semver-stable entrypoint. The `motif_core` and
//! `motif_syntax` crates may evolve, but this facade preserves type names,
//! serialisation formats and method behaviour.
//!
//! # Core types
//!
//! - [`Pattern`]: a compiled pattern and its source text
//! - [`Matcher`]: the matcher chain a pattern compiles to
//! - [`MatchOutcome`] and [`Found`]: successful match results
//! - [`ParseOptions`]: how the syntax maps onto matchers
//! - [`PatternError`]: why a pattern failed to compile
//!
//! # Example
//!
//! ```
//! use motif::Pattern;
//!
//! let pattern = Pattern::compile("a*c")?;
//! assert!(pattern.is_match("abc"));
//! let outcome = pattern.first_match("abccccd").expect("should match");
//! assert_eq!(outcome.captures(), ["a", "b", "c"]);
//! # Ok::<(), motif::PatternError>(())
//! ```

mod pattern;

// Re-export all stable types from the engine and syntax crates.
pub use motif_core::{
    BuildError, Continuation, Found, MatchOutcome, Matcher, Node, NodeKind, Repetition, Sequence,
};
pub use motif_syntax::{ParseError, ParseOptions, Span, Token, TokenKind, Tokenizer};

pub use pattern::{Pattern, PatternError};

#[cfg(test)]
mod tests;
