//! Errors reported while reading pattern syntax.

use motif_core::BuildError;
use thiserror::Error;

/// Errors from tokenizing or parsing a pattern.
///
/// Every variant records the byte offset in the pattern source where the
/// problem was detected.
///
/// # Example
///
/// ```
/// use motif_syntax::{parse, ParseError};
///
/// let err = parse("ab{c,d").unwrap_err();
/// assert_eq!(err, ParseError::UnterminatedGroup { offset: 2 });
/// assert_eq!(err.offset(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A `{` group was never closed.
    #[error("unterminated group starting at offset {offset}")]
    UnterminatedGroup {
        /// Offset of the opening brace.
        offset: usize,
    },

    /// A `[` set was never closed.
    #[error("unterminated character set starting at offset {offset}")]
    UnterminatedSet {
        /// Offset of the opening bracket.
        offset: usize,
    },

    /// A group with no alternatives, such as `{}`.
    #[error("empty group at offset {offset}")]
    EmptyGroup {
        /// Offset of the opening brace.
        offset: usize,
    },

    /// A group containing an empty alternative, such as `{a,}`.
    #[error("empty alternative at offset {offset}")]
    EmptyAlternative {
        /// Offset of the separator or closing brace after the gap.
        offset: usize,
    },

    /// A set with no members, such as `[]` or `[!]`.
    #[error("empty character set at offset {offset}")]
    EmptySet {
        /// Offset of the opening bracket.
        offset: usize,
    },

    /// A token that cannot appear where it was found.
    #[error("unexpected {found:?} at offset {offset}")]
    UnexpectedToken {
        /// Offset of the token.
        offset: usize,
        /// The offending source text.
        found: String,
    },

    /// The pattern ends in a lone backslash.
    #[error("dangling escape at offset {offset}")]
    DanglingEscape {
        /// Offset of the backslash.
        offset: usize,
    },

    /// A backslash followed by a character that needs no escaping.
    #[error("invalid escape {escaped:?} at offset {offset}")]
    InvalidEscape {
        /// Offset of the backslash.
        offset: usize,
        /// The escaped character.
        escaped: char,
    },

    /// A well-formed construct that describes an invalid matcher.
    #[error("invalid matcher at offset {offset}: {source}")]
    InvalidMatcher {
        /// Offset of the construct.
        offset: usize,
        /// Why the matcher was rejected.
        source: BuildError,
    },
}

impl ParseError {
    /// Creates an unexpected-token error.
    #[must_use]
    pub fn unexpected(offset: usize, found: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            offset,
            found: found.into(),
        }
    }

    /// Creates an invalid-matcher error.
    #[must_use]
    pub const fn invalid_matcher(offset: usize, source: BuildError) -> Self {
        Self::InvalidMatcher { offset, source }
    }

    /// Returns the byte offset where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnterminatedGroup { offset }
            | Self::UnterminatedSet { offset }
            | Self::EmptyGroup { offset }
            | Self::EmptyAlternative { offset }
            | Self::EmptySet { offset }
            | Self::UnexpectedToken { offset, .. }
            | Self::DanglingEscape { offset }
            | Self::InvalidEscape { offset, .. }
            | Self::InvalidMatcher { offset, .. } => *offset,
        }
    }
}
