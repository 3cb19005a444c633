//! Recursive-descent parser from tokens to matcher chains.

use motif_core::{Matcher, Repetition};

use crate::error::ParseError;
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Options controlling how syntax maps onto matchers.
///
/// # Example
///
/// ```
/// use motif_core::Repetition;
/// use motif_syntax::{parse_with, ParseOptions};
///
/// let options = ParseOptions::new().with_wildcard(Repetition::Greedy);
/// let matcher = parse_with("*c", &options)?;
/// let outcome = matcher.first_match("abccccd").expect("should match");
/// assert_eq!(outcome.end(), 6);
/// # Ok::<(), motif_syntax::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    wildcard: Repetition,
}

impl ParseOptions {
    /// Creates the default options: `*` is lazy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            wildcard: Repetition::Lazy,
        }
    }

    /// Sets the search order used for `*`.
    #[must_use]
    pub const fn with_wildcard(mut self, wildcard: Repetition) -> Self {
        self.wildcard = wildcard;
        self
    }

    /// Returns the search order used for `*`.
    #[must_use]
    pub const fn wildcard(&self) -> Repetition {
        self.wildcard
    }
}

/// Parses `source` with the default options.
///
/// # Errors
///
/// Returns a [`ParseError`] when the pattern is malformed.
///
/// # Example
///
/// ```
/// use motif_core::Matcher;
/// use motif_syntax::parse;
///
/// let expected = Matcher::alternation([Matcher::literal("abc"), Matcher::literal("def")])?;
/// assert_eq!(parse("{abc,def}")?, expected);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse(source: &str) -> Result<Matcher, ParseError> {
    parse_with(source, &ParseOptions::default())
}

/// Parses `source` with explicit options.
///
/// # Errors
///
/// Returns a [`ParseError`] when the pattern is malformed.
pub fn parse_with(source: &str, options: &ParseOptions) -> Result<Matcher, ParseError> {
    let tokens = Tokenizer::tokenize(source)?;
    parse_tokens(&tokens, options)
}

/// Builds a matcher from an already tokenized pattern.
///
/// # Errors
///
/// Returns a [`ParseError`] when the tokens do not form a pattern, for
/// example an unbalanced group or a set without members.
pub fn parse_tokens(tokens: &[Token], options: &ParseOptions) -> Result<Matcher, ParseError> {
    let mut parser = Parser {
        tokens,
        position: 0,
        options,
    };
    parser.sequence(0)
}

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    /// Parses items until the end of input or, inside a group, until a
    /// separator or closing brace (left for the caller).
    fn sequence(&mut self, depth: usize) -> Result<Matcher, ParseError> {
        let mut parts = Vec::new();
        while let Some(token) = self.peek() {
            let part = match token.kind() {
                TokenKind::Separator | TokenKind::GroupEnd if depth > 0 => break,
                TokenKind::Literal(text) => {
                    self.position += 1;
                    Matcher::literal(text.as_str())
                }
                TokenKind::Wildcard => {
                    self.position += 1;
                    Matcher::wildcard(self.options.wildcard())
                }
                TokenKind::GroupStart => self.group(depth)?,
                TokenKind::SetStart { negated } => self.set(*negated)?,
                _ => return Err(unexpected(token)),
            };
            parts.push(part);
        }
        Ok(Matcher::sequence(parts))
    }

    fn group(&mut self, depth: usize) -> Result<Matcher, ParseError> {
        let open = self.advance().map_or(0, |token| token.span().start());
        if matches!(self.peek().map(Token::kind), Some(TokenKind::GroupEnd)) {
            return Err(ParseError::EmptyGroup { offset: open });
        }
        let mut alternatives = Vec::new();
        loop {
            let alternative = self.sequence(depth + 1)?;
            let Some(delimiter) = self.advance() else {
                return Err(ParseError::UnterminatedGroup { offset: open });
            };
            if alternative.is_empty() {
                return Err(ParseError::EmptyAlternative {
                    offset: delimiter.span().start(),
                });
            }
            alternatives.push(alternative);
            if matches!(delimiter.kind(), TokenKind::GroupEnd) {
                break;
            }
        }
        Matcher::alternation(alternatives)
            .map_err(|source| ParseError::invalid_matcher(open, source))
    }

    fn set(&mut self, negated: bool) -> Result<Matcher, ParseError> {
        let open = self.advance().map_or(0, |token| token.span().start());
        let mut members = Vec::new();
        let mut ranges = Vec::new();
        loop {
            let Some(token) = self.advance() else {
                return Err(ParseError::UnterminatedSet { offset: open });
            };
            match token.kind() {
                TokenKind::SetMember(ch) => members.push(*ch),
                TokenKind::SetRange { low, high } => {
                    let range = Matcher::char_range(*low, *high).map_err(|source| {
                        ParseError::invalid_matcher(token.span().start(), source)
                    })?;
                    ranges.push((*low, *high, range));
                }
                TokenKind::SetEnd => break,
                _ => return Err(unexpected(token)),
            }
        }
        if members.is_empty() && ranges.is_empty() {
            return Err(ParseError::EmptySet { offset: open });
        }
        let built = if negated {
            let expanded = ranges.iter().flat_map(|&(low, high, _)| low..=high);
            Ok(Matcher::negated_char_set(members.into_iter().chain(expanded)))
        } else {
            plain_set(members, ranges.into_iter().map(|(_, _, range)| range).collect())
        };
        built.map_err(|source| ParseError::invalid_matcher(open, source))
    }
}

/// A set of members alone is a `CharSet`, a lone range is a `CharRange`, and
/// anything mixed becomes an alternation of the member set and each range.
fn plain_set(
    members: Vec<char>,
    mut ranges: Vec<Matcher>,
) -> Result<Matcher, motif_core::BuildError> {
    if ranges.is_empty() {
        return Matcher::char_set(members);
    }
    if members.is_empty() && ranges.len() == 1 {
        return Ok(ranges.remove(0));
    }
    let mut alternatives = Vec::with_capacity(ranges.len() + 1);
    if !members.is_empty() {
        alternatives.push(Matcher::char_set(members)?);
    }
    alternatives.extend(ranges);
    Matcher::alternation(alternatives)
}

fn unexpected(token: &Token) -> ParseError {
    let found = match token.kind() {
        TokenKind::Literal(text) => text.clone(),
        TokenKind::Wildcard => String::from("*"),
        TokenKind::GroupStart => String::from("{"),
        TokenKind::Separator => String::from(","),
        TokenKind::GroupEnd => String::from("}"),
        TokenKind::SetStart { negated: false } => String::from("["),
        TokenKind::SetStart { negated: true } => String::from("[!"),
        TokenKind::SetMember(ch) => ch.to_string(),
        TokenKind::SetRange { low, high } => format!("{low}-{high}"),
        TokenKind::SetEnd => String::from("]"),
    };
    ParseError::unexpected(token.span().start(), found)
}
