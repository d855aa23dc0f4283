//! Lexing functions for turning a source buffer into a token sequence.
use log::{debug, trace};

use crate::span::*;

use super::{
    char_ext::*,
    char_view::*,
    error::*,
    keywords,
    number::{self, NumberLiteral, Sign},
    tokens::*,
};

type LexResult<T> = Option<Result<T, LexError>>;

/// The outcome of an analyzer that accepted a position: the token value and
/// the number of bytes its lexeme spans.
struct Scanned {
    length: usize,
    value: TokenValue,
}

impl Scanned {
    fn kind(length: usize, kind: TokenKind) -> Self {
        Self {
            length,
            value: TokenValue::Kind(kind),
        }
    }

    fn numeric(length: usize, literal: NumberLiteral) -> Self {
        Self {
            length,
            value: TokenValue::Numeric(literal.value, literal.ty),
        }
    }
}

struct Lexer<'s> {
    view: CharView<'s>,
    tokens: Vec<RawToken>,
}

/// Tokenizes a whole buffer. Stops at the first error; no tokens are returned
/// alongside it.
pub fn tokenize(source: &[u8]) -> Result<Vec<RawToken>, LexError> {
    Lexer::new(source).run()
}

/// Tokenizes a string slice. See [`tokenize`].
pub fn lex(source: &str) -> Result<Vec<RawToken>, LexError> {
    tokenize(source.as_bytes())
}

impl<'s> Lexer<'s> {
    fn new(source: &'s [u8]) -> Self {
        Self {
            view: CharView::new(source),
            tokens: vec![],
        }
    }

    /// Runs the lexer to the end of its input, consuming it.
    fn run(mut self) -> Result<Vec<RawToken>, LexError> {
        let mut pos = 0;
        loop {
            pos = self.view.skip_dividers(pos);
            if pos >= self.view.len() {
                return Ok(self.tokens);
            }

            let scanned = self.next_token(pos).map_err(|error| {
                debug!("Tokenizing failed: {}", error);
                error
            })?;
            trace!("{} at {}", scanned.value, pos);

            self.tokens.push(RawToken {
                value: scanned.value,
                position: Bytes::new(pos),
            });
            pos += scanned.length;
        }
    }

    /// Offers `pos` to each analyzer in turn. The order matters: the minus
    /// analyzer must see `-` before the operator analyzer does.
    fn next_token(&self, pos: usize) -> Result<Scanned, LexError> {
        self.word(pos)
            .map(Ok)
            .or_else(|| self.number(pos))
            .or_else(|| self.minus(pos))
            .or_else(|| self.single_symbol(pos).map(Ok))
            .or_else(|| self.operator(pos).map(Ok))
            .or_else(|| self.string_literal(pos))
            .unwrap_or_else(|| {
                Err(LexError::new(
                    Bytes::new(pos),
                    ErrorType::UnrecognizedCharacter,
                ))
            })
    }

    /// Reads a keyword or an identifier.
    fn word(&self, pos: usize) -> Option<Scanned> {
        if !self.view.test(pos, CharExt::is_word_start) {
            return None;
        }

        let length = self.view.count_while(pos, CharExt::is_word_continue);
        let lexeme = self.view.slice(pos, pos + length);

        let value = match keywords::lookup(lexeme) {
            Some(kind) => TokenValue::Kind(kind),
            None => TokenValue::Identifier(lexeme.iter().copied().map(char::from).collect()),
        };
        Some(Scanned { length, value })
    }

    fn number(&self, pos: usize) -> LexResult<Scanned> {
        if !self.view.test(pos, CharExt::is_numeric_literal_start) {
            return None;
        }

        Some(
            number::scan_number(self.view, pos, Sign::Unsigned)
                .map(|literal| Scanned::numeric(literal.end - pos, literal)),
        )
    }

    /// Decides whether a `-` is the sign of a literal or an operator.
    ///
    /// It is a sign when the next non-divider character starts a number and
    /// the previous token cannot be the left operand of a subtraction. As an
    /// operator it combines into `--` or `-=` only with the byte immediately
    /// after it; dividers in between leave a plain `-`.
    fn minus(&self, pos: usize) -> LexResult<Scanned> {
        if !self.view.is(pos, b'-') {
            return None;
        }

        let next = self.view.skip_dividers(pos + 1);
        if self.view.test(next, CharExt::is_numeric_literal_start) && !self.follows_operand() {
            trace!("`-` at {} is a sign", pos);
            return Some(
                number::scan_number(self.view, next, Sign::Negative)
                    .map(|literal| Scanned::numeric(literal.end - pos, literal)),
            );
        }

        let scanned = match self.view.at(pos + 1) {
            Some(b'-') => Scanned::kind(2, TokenKind::SelfDec),
            Some(b'=') => Scanned::kind(2, TokenKind::SubEq),
            _ => Scanned::kind(1, TokenKind::Sub),
        };
        Some(Ok(scanned))
    }

    /// Checks whether the last token emitted could be the left operand of a
    /// binary `-`.
    fn follows_operand(&self) -> bool {
        matches!(
            self.tokens.last().map(|token| &token.value),
            Some(
                TokenValue::Identifier(_)
                    | TokenValue::Numeric(..)
                    | TokenValue::Kind(TokenKind::RightParenthesis | TokenKind::RightSquareBracket)
            )
        )
    }

    fn single_symbol(&self, pos: usize) -> Option<Scanned> {
        if !self.view.test(pos, CharExt::is_single_symbol) {
            return None;
        }

        keywords::lookup(self.view.slice(pos, pos + 1)).map(|kind| Scanned::kind(1, kind))
    }

    /// Reads the longest operator starting at `pos`.
    ///
    /// The candidate run is over-extended first, then shortened one byte at a
    /// time until it names an operator. Every opening character is an operator
    /// on its own, so the search always ends on a match.
    fn operator(&self, pos: usize) -> Option<Scanned> {
        if !self.view.test(pos, CharExt::is_combinable_operator) {
            return None;
        }

        let run = 1 + self
            .view
            .count_while(pos + 1, CharExt::is_second_combinable_operator);

        (1..=run).rev().find_map(|length| {
            keywords::lookup(self.view.slice(pos, pos + length))
                .map(|kind| Scanned::kind(length, kind))
        })
    }

    /// Reads a double-quoted string literal, resolving its escapes.
    fn string_literal(&self, pos: usize) -> LexResult<Scanned> {
        if !self.view.is(pos, b'"') {
            return None;
        }

        let unterminated = || LexError::new(Bytes::new(pos), ErrorType::UnterminatedStringLiteral);

        let mut text = vec![];
        let mut cursor = pos + 1;
        loop {
            match self.view.at(cursor) {
                None => return Some(Err(unterminated())),
                Some(b'"') => break,
                Some(b'\\') => {
                    let escaped = match self.view.at(cursor + 1) {
                        Some(b'"') => b'"',
                        Some(b'\\') => b'\\',
                        Some(b'n') => b'\n',
                        Some(b't') => b'\t',
                        Some(b'r') => b'\r',
                        Some(b'0') => b'\0',
                        Some(other) => {
                            return Some(Err(LexError::new(
                                Bytes::new(cursor + 1),
                                ErrorType::InvalidEscape(char::from(other)),
                            )));
                        }
                        None => return Some(Err(unterminated())),
                    };
                    text.push(escaped);
                    cursor += 2;
                    continue;
                }
                Some(ch) => text.push(ch),
            }
            cursor += 1;
        }

        Some(Ok(Scanned {
            length: cursor + 1 - pos,
            value: TokenValue::StringLiteral(String::from_utf8_lossy(&text).into_owned()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(kind: TokenKind) -> TokenValue {
        TokenValue::Kind(kind)
    }

    fn ident(name: &str) -> TokenValue {
        TokenValue::Identifier(name.to_string())
    }

    fn num(value: f64, ty: NumericType) -> TokenValue {
        TokenValue::Numeric(value, ty)
    }

    fn expect_values(expected: Vec<TokenValue>, actual: Vec<RawToken>) {
        let actual_values: Vec<&TokenValue> = actual.iter().map(|t| &t.value).collect();

        for (idx, (value, token)) in expected.iter().zip(actual.iter()).enumerate() {
            assert_eq!(
                value, &token.value,
                "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}\n\nExpected token #{} to be '{:?}', but was '{:?}'",
                expected, actual_values, idx, value, &token.value
            );
        }
        assert_eq!(
            expected.len(),
            actual.len(),
            "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}\n\nExpected to find {} tokens, but found {}",
            expected,
            actual_values,
            expected.len(),
            actual.len()
        );
    }

    fn assert_lexes(source: &str, values: Vec<TokenValue>) {
        let tokens = lex(source).expect("Unexpected lexer error");

        expect_values(values, tokens);
    }

    fn assert_positions(source: &str, positions: Vec<usize>) {
        let tokens = lex(source).expect("Unexpected lexer error");
        let actual: Vec<usize> = tokens.iter().map(|t| t.position.into()).collect();

        assert_eq!(positions, actual);
    }

    fn assert_lex_fails(source: &str, error_type: ErrorType, position: usize) {
        match lex(source) {
            Ok(tokens) => panic!("Expected lexer to fail, but it produced: {:#?}", tokens),
            Err(error) => {
                assert_eq!(error.error_type, error_type);
                assert_eq!(error.position, Bytes::new(position));
            }
        }
    }

    fn assert_malformed_number(source: &str) {
        match lex(source) {
            Err(LexError {
                error_type: ErrorType::MalformedNumber(_),
                ..
            }) => {}
            other => panic!("Expected a malformed number, got {:#?}", other),
        }
    }

    #[test]
    fn empty_input() {
        assert_lexes("", vec![]);
    }

    #[test]
    fn only_dividers() {
        assert_lexes(" \t\n  ", vec![]);
    }

    #[test]
    fn identifier() {
        assert_lexes("foo_1", vec![ident("foo_1")]);
        assert_lexes("_", vec![ident("_")]);
    }

    #[test]
    fn keywords() {
        assert_lexes(
            "while return i32 tid_t",
            vec![
                kind(TokenKind::While),
                kind(TokenKind::Return),
                kind(TokenKind::I32),
                kind(TokenKind::TidT),
            ],
        );
    }

    #[test]
    fn keyword_prefix_is_identifier() {
        assert_lexes("returned iff", vec![ident("returned"), ident("iff")]);
    }

    #[test]
    fn parser_markers_are_identifiers() {
        assert_lexes("num id", vec![ident("num"), ident("id")]);
    }

    #[test]
    fn longest_operator_wins() {
        assert_lexes("<=", vec![kind(TokenKind::Leq)]);
        assert_lexes("<<=", vec![kind(TokenKind::LeftShiftEq)]);
        assert_lexes("&&", vec![kind(TokenKind::LogicAnd)]);
        assert_lexes("::", vec![kind(TokenKind::ClassScope)]);
    }

    #[test]
    fn operator_run_is_extended_past_non_extending_opener() {
        assert_lexes("*=", vec![kind(TokenKind::MulEq)]);
        assert_lexes("!=", vec![kind(TokenKind::Neq)]);
        assert_lexes("^=", vec![kind(TokenKind::XorEq)]);
    }

    #[test]
    fn operator_run_shrinks_to_known_operator() {
        assert_lexes(
            "<<<",
            vec![kind(TokenKind::LeftShift), kind(TokenKind::Less)],
        );
        assert_lexes(
            "+++",
            vec![kind(TokenKind::SelfInc), kind(TokenKind::Add)],
        );
        assert_lexes(
            "&&=",
            vec![kind(TokenKind::LogicAnd), kind(TokenKind::Assign)],
        );
    }

    #[test]
    fn operator_run_ends_at_non_extending_character() {
        assert_lexes(
            "=!",
            vec![kind(TokenKind::Assign), kind(TokenKind::LogicNot)],
        );
    }

    #[test]
    fn single_symbols() {
        assert_lexes(
            "(){}[];,?",
            vec![
                kind(TokenKind::LeftParenthesis),
                kind(TokenKind::RightParenthesis),
                kind(TokenKind::LeftCurlyBracket),
                kind(TokenKind::RightCurlyBracket),
                kind(TokenKind::LeftSquareBracket),
                kind(TokenKind::RightSquareBracket),
                kind(TokenKind::Semicolon),
                kind(TokenKind::Comma),
                kind(TokenKind::Question),
            ],
        );
    }

    #[test]
    fn hexadecimal_literal() {
        assert_lexes("0x1A", vec![num(26.0, NumericType::U32)]);
    }

    #[test]
    fn bare_hexadecimal_prefix() {
        assert_lex_fails("0x", ErrorType::MalformedNumber("expected a hexadecimal digit after `0x`"), 2);
    }

    #[test]
    fn fixed_point_literal() {
        assert_lexes("3.14", vec![num(3.14, NumericType::F32)]);
        assert_lexes("0.3", vec![num(0.3, NumericType::F32)]);
    }

    #[test]
    fn exponent_literal_is_exact() {
        assert_lexes("3.14e-2", vec![num(0.0314, NumericType::F64)]);
    }

    #[test]
    fn second_decimal_point() {
        assert_malformed_number("3.14.5");
    }

    #[test]
    fn period_starts_a_numeric_literal() {
        assert_lex_fails("a.b", ErrorType::InvalidNumberSuffix, 2);
    }

    #[test]
    fn leading_minus_is_a_sign() {
        assert_lexes("-5", vec![num(-5.0, NumericType::I32)]);
        assert_positions("-5", vec![0]);
    }

    #[test]
    fn sign_may_be_separated_from_literal() {
        assert_lexes("-  2.5", vec![num(-2.5, NumericType::F32)]);
    }

    #[test]
    fn minus_after_identifier_is_subtraction() {
        assert_lexes(
            "a-5",
            vec![ident("a"), kind(TokenKind::Sub), num(5.0, NumericType::I32)],
        );
    }

    #[test]
    fn minus_after_number_is_subtraction() {
        assert_lexes(
            "1 -2",
            vec![
                num(1.0, NumericType::I32),
                kind(TokenKind::Sub),
                num(2.0, NumericType::I32),
            ],
        );
    }

    #[test]
    fn minus_after_closing_brackets_is_subtraction() {
        assert_lexes(
            "f(x) -2",
            vec![
                ident("f"),
                kind(TokenKind::LeftParenthesis),
                ident("x"),
                kind(TokenKind::RightParenthesis),
                kind(TokenKind::Sub),
                num(2.0, NumericType::I32),
            ],
        );
        assert_lexes(
            "a[1] -2",
            vec![
                ident("a"),
                kind(TokenKind::LeftSquareBracket),
                num(1.0, NumericType::I32),
                kind(TokenKind::RightSquareBracket),
                kind(TokenKind::Sub),
                num(2.0, NumericType::I32),
            ],
        );
    }

    #[test]
    fn minus_after_closing_brace_is_a_sign() {
        assert_lexes(
            "} -2",
            vec![
                kind(TokenKind::RightCurlyBracket),
                num(-2.0, NumericType::I32),
            ],
        );
    }

    #[test]
    fn minus_after_keyword_or_open_paren_is_a_sign() {
        assert_lexes(
            "return -5;",
            vec![
                kind(TokenKind::Return),
                num(-5.0, NumericType::I32),
                kind(TokenKind::Semicolon),
            ],
        );
        assert_lexes(
            "( - 5 )",
            vec![
                kind(TokenKind::LeftParenthesis),
                num(-5.0, NumericType::I32),
                kind(TokenKind::RightParenthesis),
            ],
        );
    }

    #[test]
    fn separated_minus_signs() {
        assert_lexes(
            "a - -5",
            vec![ident("a"), kind(TokenKind::Sub), num(-5.0, NumericType::I32)],
        );
        assert_positions("a - -5", vec![0, 2, 4]);
    }

    #[test]
    fn adjacent_minus_signs_combine() {
        assert_lexes("--", vec![kind(TokenKind::SelfDec)]);
        assert_lexes("a--", vec![ident("a"), kind(TokenKind::SelfDec)]);
        assert_lexes(
            "--5",
            vec![kind(TokenKind::SelfDec), num(5.0, NumericType::I32)],
        );
    }

    #[test]
    fn minus_equals_needs_adjacency() {
        assert_lexes(
            "a -= 1",
            vec![ident("a"), kind(TokenKind::SubEq), num(1.0, NumericType::I32)],
        );
        assert_lexes(
            "a - = 1",
            vec![
                ident("a"),
                kind(TokenKind::Sub),
                kind(TokenKind::Assign),
                num(1.0, NumericType::I32),
            ],
        );
    }

    #[test]
    fn minus_before_non_number_is_an_operator() {
        assert_lexes("-", vec![kind(TokenKind::Sub)]);
        assert_lexes("-x", vec![kind(TokenKind::Sub), ident("x")]);
        assert_lexes(
            "->",
            vec![kind(TokenKind::Sub), kind(TokenKind::Greater)],
        );
    }

    #[test]
    fn signed_literal_rejects_hexadecimal_and_unsigned() {
        assert_malformed_number("-0x1");
        assert_malformed_number("-5u");
    }

    #[test]
    fn unrecognized_character() {
        assert_lex_fails("@", ErrorType::UnrecognizedCharacter, 0);
        assert_lex_fails("a = b @ c", ErrorType::UnrecognizedCharacter, 6);
    }

    #[test]
    fn letter_after_number() {
        assert_lex_fails("x = 5x;", ErrorType::InvalidNumberSuffix, 5);
    }

    #[test]
    fn string_literal() {
        assert_lexes(
            r#"s = "a \"quoted\"\tword\n";"#,
            vec![
                ident("s"),
                kind(TokenKind::Assign),
                TokenValue::StringLiteral("a \"quoted\"\tword\n".to_string()),
                kind(TokenKind::Semicolon),
            ],
        );
    }

    #[test]
    fn string_literal_must_be_closed() {
        assert_lex_fails(r#"x "abc"#, ErrorType::UnterminatedStringLiteral, 2);
        assert_lex_fails(r#""abc\"#, ErrorType::UnterminatedStringLiteral, 0);
    }

    #[test]
    fn string_literal_rejects_unknown_escape() {
        assert_lex_fails(r#""a\qb""#, ErrorType::InvalidEscape('q'), 3);
    }

    #[test]
    fn declaration() {
        assert_lexes(
            "u32 mask = 0xff_00;",
            vec![
                kind(TokenKind::U32),
                ident("mask"),
                kind(TokenKind::Assign),
                num(65280.0, NumericType::U32),
                kind(TokenKind::Semicolon),
            ],
        );
        assert_positions("u32 mask = 0xff_00;", vec![0, 4, 9, 11, 18]);
    }

    #[test]
    fn loop_header() {
        assert_lexes(
            "for (i = 0; i; i++) { x -= 1e3; }",
            vec![
                kind(TokenKind::For),
                kind(TokenKind::LeftParenthesis),
                ident("i"),
                kind(TokenKind::Assign),
                num(0.0, NumericType::I32),
                kind(TokenKind::Semicolon),
                ident("i"),
                kind(TokenKind::Semicolon),
                ident("i"),
                kind(TokenKind::SelfInc),
                kind(TokenKind::RightParenthesis),
                kind(TokenKind::LeftCurlyBracket),
                ident("x"),
                kind(TokenKind::SubEq),
                num(1000.0, NumericType::F64),
                kind(TokenKind::Semicolon),
                kind(TokenKind::RightCurlyBracket),
            ],
        );
    }

    #[test]
    fn tokenizing_is_repeatable() {
        let source = "i32 a = -3; a -= b[2] - -1.5e1;";

        assert_eq!(lex(source), lex(source));
    }
}
