//! Lexical tokens of the pattern syntax.

use std::ops::Range;

/// A half-open byte range in the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the offset of the first byte.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the offset one past the last byte.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// What a token denotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of literal characters with escapes resolved.
    Literal(String),
    /// `*`
    Wildcard,
    /// `{`
    GroupStart,
    /// `,` inside a group.
    Separator,
    /// `}`
    GroupEnd,
    /// `[` or, when `negated`, `[!`.
    SetStart {
        /// Whether the set excludes its members.
        negated: bool,
    },
    /// A single set member.
    SetMember(char),
    /// An inclusive `low-high` range inside a set.
    SetRange {
        /// First character of the range.
        low: char,
        /// Last character of the range.
        high: char,
    },
    /// `]`
    SetEnd,
}

/// A token and the source span it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns what the token denotes.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Returns where the token was read from.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }
}
