//! Tokeniser entry point tying the splitter and builder together.

use tracing::debug;

use super::builder::build;
use super::splitter::{Fragment, Splitter};
use super::vocabulary::Vocabulary;
use super::Token;
use crate::error::Result;

/// Tokenises one SQL query.
///
/// The lexer holds no scanning state of its own; every call to
/// [`Lexer::split`] or [`Lexer::tokenize`] starts from scratch, so one lexer
/// may be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a, 'v> {
    /// The query text.
    input: &'a str,
    /// Vocabulary override; the standard one is used when unset.
    vocabulary: Option<&'v Vocabulary>,
}

impl<'a> Lexer<'a, 'static> {
    /// Creates a lexer that classifies with the standard vocabulary.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            vocabulary: None,
        }
    }
}

impl<'a, 'v> Lexer<'a, 'v> {
    /// Creates a lexer that classifies with `vocabulary`.
    #[must_use]
    pub const fn with_vocabulary(input: &'a str, vocabulary: &'v Vocabulary) -> Self {
        Self {
            input,
            vocabulary: Some(vocabulary),
        }
    }

    /// Returns the query text.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    fn vocabulary(&self) -> Result<&'v Vocabulary> {
        match self.vocabulary {
            Some(vocabulary) => Ok(vocabulary),
            None => Ok(Vocabulary::standard()?),
        }
    }

    /// Runs only the first phase and returns the fragments.
    ///
    /// # Errors
    ///
    /// Fails on an unterminated container or escape, on a malformed numeric
    /// literal, or when the standard vocabulary is invalid.
    pub fn split(&self) -> Result<Vec<Fragment<'a>>> {
        Splitter::new(self.input, self.vocabulary()?).split()
    }

    /// Tokenises the whole query.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Lexer::split`]; classification
    /// itself never fails.
    pub fn tokenize(&self) -> Result<Vec<Token>> {
        let vocabulary = self.vocabulary()?;
        let fragments = Splitter::new(self.input, vocabulary).split()?;
        let tokens = build(&fragments, vocabulary);
        debug!(
            fragments = fragments.len(),
            tokens = tokens.len(),
            unknown = tokens.iter().filter(|t| t.is_unknown()).count(),
            "tokenized query"
        );
        Ok(tokens)
    }
}
