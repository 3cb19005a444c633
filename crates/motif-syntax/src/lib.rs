//! Compact pattern syntax for motif matchers.
//!
//! The syntax is glob-like:
//!
//! - literal characters match themselves
//! - `*` matches any run of characters (lazy unless configured otherwise)
//! - `{abc,d*f}` matches the first alternative that lets the rest match; each
//!   alternative is a full sub-pattern and groups may nest
//! - `[abc]` matches one listed character, `[a-z]` one character in a range,
//!   and `[!abc]` one character that is not listed
//! - `\` escapes any of `\ * { } [ ] ! , -`
//!
//! A set compiles to a single character-class node rather than an
//! alternation, so `[qwe]` accepts the same text as `{q,w,e}` but the two
//! trees are not structurally equal.
//!
//! [`Tokenizer`] turns source text into spanned [`Token`]s and
//! [`parse_tokens`] builds a [`motif_core::Matcher`] from them; [`parse`] and
//! [`parse_with`] do both.
//!
//! # Example
//!
//! ```
//! use motif_syntax::parse;
//!
//! let matcher = parse("report-[0-9]*.{csv,txt}")?;
//! assert!(matcher.is_full_match("report-7-final.csv"));
//! assert!(!matcher.is_full_match("report-x.csv"));
//! # Ok::<(), motif_syntax::ParseError>(())
//! ```

mod error;
mod parser;
mod token;
mod tokenizer;

pub use error::ParseError;
pub use parser::{ParseOptions, parse, parse_tokens, parse_with};
pub use token::{Span, Token, TokenKind};
pub use tokenizer::{ESCAPABLE, Tokenizer};

#[cfg(test)]
mod tests;
