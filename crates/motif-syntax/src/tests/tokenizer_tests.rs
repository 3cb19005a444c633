//! Tests for the tokenizer.

use rstest::rstest;

use crate::{ParseError, Span, TokenKind, Tokenizer};

fn kinds(source: &str) -> Vec<TokenKind> {
    Tokenizer::tokenize(source)
        .expect("tokenize")
        .into_iter()
        .map(|token| token.kind().clone())
        .collect()
}

fn literal(text: &str) -> TokenKind {
    TokenKind::Literal(text.to_owned())
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(kinds("").is_empty());
}

#[test]
fn wildcard_then_group() {
    assert_eq!(
        kinds("*{abc,def}"),
        [
            TokenKind::Wildcard,
            TokenKind::GroupStart,
            literal("abc"),
            TokenKind::Separator,
            literal("def"),
            TokenKind::GroupEnd,
        ]
    );
}

#[test]
fn escapes_fold_into_one_literal() {
    assert_eq!(kinds(r"\\abc\{\}\*"), [literal(r"\abc{}*")]);
}

#[test]
fn escaped_literal_before_group() {
    assert_eq!(
        kinds(r"\\abc\{\}\*{a,b,c}"),
        [
            literal(r"\abc{}*"),
            TokenKind::GroupStart,
            literal("a"),
            TokenKind::Separator,
            literal("b"),
            TokenKind::Separator,
            literal("c"),
            TokenKind::GroupEnd,
        ]
    );
}

#[rstest]
#[case("*[qwe]", false)]
#[case("*[!qwe]", true)]
fn sets_emit_one_token_per_member(#[case] source: &str, #[case] negated: bool) {
    assert_eq!(
        kinds(source),
        [
            TokenKind::Wildcard,
            TokenKind::SetStart { negated },
            TokenKind::SetMember('q'),
            TokenKind::SetMember('w'),
            TokenKind::SetMember('e'),
            TokenKind::SetEnd,
        ]
    );
}

#[rstest]
#[case("[a-z]", vec![TokenKind::SetRange { low: 'a', high: 'z' }])]
#[case("[-a]", vec![TokenKind::SetMember('-'), TokenKind::SetMember('a')])]
#[case("[a-]", vec![TokenKind::SetMember('a'), TokenKind::SetMember('-')])]
#[case(r"[a\-z]", vec![
    TokenKind::SetMember('a'),
    TokenKind::SetMember('-'),
    TokenKind::SetMember('z'),
])]
#[case("[x0-9y]", vec![
    TokenKind::SetMember('x'),
    TokenKind::SetRange { low: '0', high: '9' },
    TokenKind::SetMember('y'),
])]
#[case("[*{,}]", vec![
    TokenKind::SetMember('*'),
    TokenKind::SetMember('{'),
    TokenKind::SetMember(','),
    TokenKind::SetMember('}'),
])]
fn set_members_and_ranges(#[case] source: &str, #[case] members: Vec<TokenKind>) {
    let mut expected = vec![TokenKind::SetStart { negated: false }];
    expected.extend(members);
    expected.push(TokenKind::SetEnd);
    assert_eq!(kinds(source), expected);
}

#[rstest]
#[case("a,b", "a,b")]
#[case("a!b", "a!b")]
#[case("a-b", "a-b")]
#[case("héllo wörld", "héllo wörld")]
fn syntax_characters_outside_their_context_are_literal(
    #[case] source: &str,
    #[case] expected: &str,
) {
    assert_eq!(kinds(source), [literal(expected)]);
}

#[test]
fn tokens_carry_byte_spans() {
    let spans: Vec<Span> = Tokenizer::tokenize("é*{a}[!b]")
        .expect("tokenize")
        .iter()
        .map(crate::Token::span)
        .collect();
    assert_eq!(
        spans,
        [
            Span::new(0, 2),
            Span::new(2, 3),
            Span::new(3, 4),
            Span::new(4, 5),
            Span::new(5, 6),
            Span::new(6, 8),
            Span::new(8, 9),
            Span::new(9, 10),
        ]
    );
}

#[rstest]
#[case(r"abc\", ParseError::DanglingEscape { offset: 3 })]
#[case(r"a\b", ParseError::InvalidEscape { offset: 1, escaped: 'b' })]
#[case(r"[a\q]", ParseError::InvalidEscape { offset: 2, escaped: 'q' })]
#[case("ab]", ParseError::unexpected(2, "]"))]
#[case("x[abc", ParseError::UnterminatedSet { offset: 1 })]
#[case("[!", ParseError::UnterminatedSet { offset: 0 })]
fn lexical_errors(#[case] source: &str, #[case] expected: ParseError) {
    assert_eq!(Tokenizer::tokenize(source), Err(expected));
}
