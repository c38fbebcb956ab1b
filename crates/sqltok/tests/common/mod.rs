#![allow(dead_code)]

use sqltok::{tokenize, LexError, Span, Token, TokenKind};

pub fn tokens(sql: &str) -> Vec<Token> {
    tokenize(sql).unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e}"))
}

pub fn tokenize_err(sql: &str) -> LexError {
    tokenize(sql).expect_err(&format!("Expected tokenize error for: {sql}"))
}

/// Builds an expected token; spans are ignored by token equality.
pub fn tok(kind: TokenKind, raw: &str) -> Token {
    Token::new(kind, raw, Span::new(0, 0))
}

/// Asserts that `sql` tokenises to exactly `expected`, comparing kind and
/// raw text.
pub fn assert_tokens(sql: &str, expected: &[Token]) {
    let actual = tokens(sql);
    assert_eq!(
        actual, expected,
        "Token mismatch.\n  Input:    {sql}\n  Actual:   {actual:?}\n  Expected: {expected:?}"
    );
}
