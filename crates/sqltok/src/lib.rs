//! # sqltok
//!
//! Turns a raw SQL query into an ordered list of typed tokens, ready for a
//! parser to consume.
//!
//! Tokenisation is a two-phase scan:
//! - the splitter cuts the query into fragments, keeping quoted strings,
//!   escaped identifiers, placeholders and parenthesised expressions whole;
//! - the builder classifies fragments, matching multi-word keywords such as
//!   `LEFT JOIN` or `IS NOT NULL` longest-first.
//!
//! ```rust
//! use sqltok::{tokenize, TokenKind};
//!
//! let tokens = tokenize("SELECT * FROM `users` WHERE id = 1;").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Select,
//!         TokenKind::Unknown,
//!         TokenKind::From,
//!         TokenKind::EscapedValue,
//!         TokenKind::Where,
//!         TokenKind::Unknown,
//!         TokenKind::Equals,
//!         TokenKind::Numeric,
//!     ]
//! );
//! ```
//!
//! Words outside the keyword table are not errors; they come back as
//! [`TokenKind::Unknown`]. Only malformed input (an unclosed container, a
//! dangling escape or a numeric literal with two decimal points) fails.

pub mod error;
pub mod lexer;

pub use error::{LexError, Result, VocabularyError};
pub use lexer::{Fragment, Lexer, Span, Token, TokenCategory, TokenKind, Vocabulary};

/// Tokenises `sql` with the standard vocabulary.
///
/// # Errors
///
/// See [`Lexer::tokenize`].
pub fn tokenize(sql: &str) -> Result<Vec<Token>> {
    Lexer::new(sql).tokenize()
}

/// Splits `sql` into fragments without classifying them.
///
/// # Errors
///
/// See [`Lexer::split`].
pub fn split(sql: &str) -> Result<Vec<Fragment<'_>>> {
    Lexer::new(sql).split()
}
