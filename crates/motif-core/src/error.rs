//! Construction errors for matcher trees.
//!
//! Match failures are never errors; only malformed matcher parameters are
//! reported, and always at build time.

use thiserror::Error;

/// Errors raised while building a [`Matcher`](crate::Matcher).
///
/// # Example
///
/// ```
/// use motif_core::{BuildError, Matcher};
///
/// let err = Matcher::char_range('z', 'a').unwrap_err();
/// assert_eq!(err, BuildError::InvertedRange { low: 'z', high: 'a' });
/// assert_eq!(err.to_string(), "invalid character range: 'z' is greater than 'a'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// An alternation was given no alternatives.
    #[error("alternation requires at least one alternative")]
    EmptyAlternation,

    /// A character set was given no members.
    #[error("character set requires at least one member")]
    EmptyCharSet,

    /// A character range whose lower bound is above its upper bound.
    #[error("invalid character range: {low:?} is greater than {high:?}")]
    InvertedRange {
        /// The requested lower bound.
        low: char,
        /// The requested upper bound.
        high: char,
    },
}
