//! Compiled patterns.
//!
//! A [`Pattern`] pairs the matcher chain with the text it was compiled from,
//! so diagnostics and logs can refer back to what the caller wrote.

use std::fmt;
use std::str::FromStr;

use motif_core::{Found, MatchOutcome, Matcher};
use motif_syntax::{ParseError, ParseOptions, parse_with};
use thiserror::Error;
use tracing::{debug, trace};

const PATTERN_TARGET: &str = "motif::pattern";

/// Errors raised while compiling a [`Pattern`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern text is malformed.
    #[error("invalid pattern {pattern:?}: {source}")]
    Parse {
        /// The pattern text as given.
        pattern: String,
        /// What the parser rejected.
        source: ParseError,
    },
}

impl PatternError {
    /// Returns the parse error behind this failure.
    #[must_use]
    pub const fn parse_error(&self) -> &ParseError {
        match self {
            Self::Parse { source, .. } => source,
        }
    }

    /// Returns the byte offset in the pattern where compilation failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.parse_error().offset()
    }
}

/// A compiled pattern.
///
/// # Example
///
/// ```
/// use motif::{ParseOptions, Pattern, Repetition};
///
/// let options = ParseOptions::new().with_wildcard(Repetition::Greedy);
/// let pattern = Pattern::compile_with("*c", &options)?;
/// let found = pattern.find("xxabccd").expect("should find");
/// assert_eq!(found.start(), 0);
/// assert_eq!(found.outcome().end(), 6);
/// # Ok::<(), motif::PatternError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: Option<String>,
    matcher: Matcher,
}

impl Pattern {
    /// Compiles `source` with the default options.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Parse`] when `source` is malformed.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        Self::compile_with(source, &ParseOptions::default())
    }

    /// Compiles `source` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Parse`] when `source` is malformed.
    pub fn compile_with(source: &str, options: &ParseOptions) -> Result<Self, PatternError> {
        let matcher = parse_with(source, options).map_err(|err| {
            debug!(
                target: PATTERN_TARGET,
                pattern = source,
                offset = err.offset(),
                error = %err,
                "pattern rejected"
            );
            PatternError::Parse {
                pattern: source.to_owned(),
                source: err,
            }
        })?;
        debug!(
            target: PATTERN_TARGET,
            pattern = source,
            nodes = matcher.len(),
            wildcard = ?options.wildcard(),
            "pattern compiled"
        );
        Ok(Self {
            source: Some(source.to_owned()),
            matcher,
        })
    }

    /// Wraps a matcher built by hand.
    #[must_use]
    pub const fn from_matcher(matcher: Matcher) -> Self {
        Self {
            source: None,
            matcher,
        }
    }

    /// Returns the text the pattern was compiled from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the compiled matcher chain.
    #[must_use]
    pub const fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Consumes the pattern, returning its matcher chain.
    #[must_use]
    pub fn into_matcher(self) -> Matcher {
        self.matcher
    }

    /// Returns `true` when the pattern consumes the whole of `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        let matched = self.matcher.is_full_match(text);
        trace!(
            target: PATTERN_TARGET,
            pattern = self.source(),
            text_len = text.len(),
            matched,
            "full match"
        );
        matched
    }

    /// Matches a prefix of `text`.
    #[must_use]
    pub fn first_match(&self, text: &str) -> Option<MatchOutcome> {
        let outcome = self.matcher.first_match(text);
        trace!(
            target: PATTERN_TARGET,
            pattern = self.source(),
            text_len = text.len(),
            end = outcome.as_ref().map(MatchOutcome::end),
            "prefix match"
        );
        outcome
    }

    /// Finds the leftmost match anywhere in `text`.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<Found> {
        let found = self.matcher.find(text);
        trace!(
            target: PATTERN_TARGET,
            pattern = self.source(),
            text_len = text.len(),
            start = found.as_ref().map(Found::start),
            "search"
        );
        found
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl From<Matcher> for Pattern {
    fn from(matcher: Matcher) -> Self {
        Self::from_matcher(matcher)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source.as_deref() {
            Some(source) => f.write_str(source),
            None => write!(f, "{:?}", self.matcher),
        }
    }
}
