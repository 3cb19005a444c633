//! Lexer for the pattern syntax.
//!
//! Literal characters outside sets are coalesced into a single
//! [`TokenKind::Literal`]. A set is lexed in one pass from `[` to `]`, so
//! ranges are resolved here and a stray `]` is a lexical error. Group
//! structure is left to the parser; `,` only separates alternatives while a
//! group is open and is literal otherwise.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::ParseError;
use crate::token::{Span, Token, TokenKind};

/// Characters that may follow a backslash.
pub const ESCAPABLE: [char; 9] = ['\\', '*', '{', '}', '[', ']', '!', ',', '-'];

/// Splits pattern source into [`Token`]s.
///
/// # Example
///
/// ```
/// use motif_syntax::{TokenKind, Tokenizer};
///
/// let tokens = Tokenizer::tokenize("*{abc,def}")?;
/// let kinds: Vec<&TokenKind> = tokens.iter().map(|token| token.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         &TokenKind::Wildcard,
///         &TokenKind::GroupStart,
///         &TokenKind::Literal("abc".into()),
///         &TokenKind::Separator,
///         &TokenKind::Literal("def".into()),
///         &TokenKind::GroupEnd,
///     ]
/// );
/// # Ok::<(), motif_syntax::ParseError>(())
/// ```
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    literal: String,
    literal_start: usize,
    depth: usize,
}

/// A set member as read from source, before ranges are resolved.
struct RawMember {
    ch: char,
    offset: usize,
    end: usize,
    is_dash: bool,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizes `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for invalid or dangling escapes, an
    /// unterminated set, or a `]` outside a set.
    pub fn tokenize(source: &'a str) -> Result<Vec<Token>, ParseError> {
        let mut tokenizer = Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: Vec::new(),
            literal: String::new(),
            literal_start: 0,
            depth: 0,
        };
        tokenizer.run()?;
        Ok(tokenizer.tokens)
    }

    fn run(&mut self) -> Result<(), ParseError> {
        while let Some((offset, ch)) = self.chars.next() {
            match ch {
                '\\' => {
                    let escaped = self.escape(offset)?;
                    self.push_literal(offset, escaped);
                }
                '*' => self.push(TokenKind::Wildcard, offset, 1),
                '{' => {
                    self.depth = self.depth.saturating_add(1);
                    self.push(TokenKind::GroupStart, offset, 1);
                }
                ',' if self.depth > 0 => self.push(TokenKind::Separator, offset, 1),
                '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    self.push(TokenKind::GroupEnd, offset, 1);
                }
                '[' => self.set(offset)?,
                ']' => return Err(ParseError::unexpected(offset, "]")),
                other => self.push_literal(offset, other),
            }
        }
        self.flush(self.source.len());
        Ok(())
    }

    fn escape(&mut self, offset: usize) -> Result<char, ParseError> {
        match self.chars.next() {
            None => Err(ParseError::DanglingEscape { offset }),
            Some((_, escaped)) if ESCAPABLE.contains(&escaped) => Ok(escaped),
            Some((_, escaped)) => Err(ParseError::InvalidEscape { offset, escaped }),
        }
    }

    fn push_literal(&mut self, offset: usize, ch: char) {
        if self.literal.is_empty() {
            self.literal_start = offset;
        }
        self.literal.push(ch);
    }

    fn flush(&mut self, end: usize) {
        if self.literal.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.literal);
        self.tokens.push(Token::new(
            TokenKind::Literal(text),
            Span::new(self.literal_start, end),
        ));
    }

    fn push(&mut self, kind: TokenKind, offset: usize, width: usize) {
        self.flush(offset);
        self.tokens
            .push(Token::new(kind, Span::new(offset, offset.saturating_add(width))));
    }

    fn set(&mut self, start: usize) -> Result<(), ParseError> {
        let negated = self.chars.next_if(|&(_, ch)| ch == '!').is_some();
        let width = if negated { 2 } else { 1 };
        self.push(TokenKind::SetStart { negated }, start, width);

        let mut members = Vec::new();
        loop {
            let Some((offset, ch)) = self.chars.next() else {
                return Err(ParseError::UnterminatedSet { offset: start });
            };
            let member = match ch {
                ']' => {
                    self.push_members(&members);
                    self.tokens
                        .push(Token::new(TokenKind::SetEnd, Span::new(offset, offset + 1)));
                    return Ok(());
                }
                '\\' => RawMember {
                    ch: self.escape(offset)?,
                    offset,
                    end: self.position(),
                    is_dash: false,
                },
                other => RawMember {
                    ch: other,
                    offset,
                    end: offset + other.len_utf8(),
                    is_dash: other == '-',
                },
            };
            members.push(member);
        }
    }

    /// Emits members, joining `low - high` triples into ranges. A dash at
    /// either end of the set is an ordinary member.
    fn push_members(&mut self, members: &[RawMember]) {
        let mut index = 0;
        while let Some(member) = members.get(index) {
            match (members.get(index + 1), members.get(index + 2)) {
                (Some(dash), Some(high)) if dash.is_dash => {
                    self.tokens.push(Token::new(
                        TokenKind::SetRange {
                            low: member.ch,
                            high: high.ch,
                        },
                        Span::new(member.offset, high.end),
                    ));
                    index += 3;
                }
                _ => {
                    self.tokens.push(Token::new(
                        TokenKind::SetMember(member.ch),
                        Span::new(member.offset, member.end),
                    ));
                    index += 1;
                }
            }
        }
    }

    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.source.len(), |&(offset, _)| offset)
    }
}
