//! SQL tokeniser.
//!
//! Tokenisation runs in two phases: the [`Splitter`] cuts the query into
//! [`Fragment`]s and [`build`] classifies them into [`Token`]s using a
//! [`Vocabulary`]. [`Lexer`] runs both.

mod builder;
mod span;
mod splitter;
mod token;
mod tokenizer;
pub mod vocabulary;

pub use builder::build;
pub use span::Span;
pub use splitter::{Fragment, Splitter};
pub use token::{Token, TokenCategory, TokenKind};
pub use tokenizer::Lexer;
pub use vocabulary::{Container, Vocabulary};
