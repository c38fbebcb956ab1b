//! Error types for tokenisation.

use crate::lexer::TokenKind;

/// Errors that abort tokenisation of a query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The input ended while a container was still open.
    #[error("Unexpected end of input: `{open}` opened at byte {position} was never closed by `{close}`")]
    UnterminatedContainer {
        /// The opening delimiter.
        open: char,
        /// The delimiter that would have closed it.
        close: char,
        /// Byte offset of the opening delimiter.
        position: usize,
    },

    /// The input ended with an escape still pending.
    #[error("Unexpected end of input: dangling escape at byte {position}")]
    UnterminatedEscape {
        /// Byte offset of the last backslash.
        position: usize,
    },

    /// A numeric literal contained a second decimal point.
    #[error("Invalid character `{character}` at byte {position} after numeric `{fragment}`: not expecting another . in a numeric")]
    InvalidNumeric {
        /// The offending character.
        character: char,
        /// The numeric text accumulated before it.
        fragment: String,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// The vocabulary used for classification failed validation.
    #[error("Invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Configuration defects in a container map or keyword table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    /// One spelling maps to more than one token kind.
    #[error("Keyword '{spelling}' is listed for both {first} and {second}")]
    AmbiguousKeyword {
        /// The folded spelling.
        spelling: String,
        /// The kind that claimed the spelling first.
        first: TokenKind,
        /// The kind that claimed it again.
        second: TokenKind,
    },

    /// One character opens more than one container.
    #[error("Character `{open}` opens more than one container")]
    DuplicateContainer {
        /// The shared opening character.
        open: char,
    },

    /// A spelling is empty, not lowercase, or not single-space joined.
    #[error("Spelling '{spelling}' for {kind} is not in canonical lowercase, single-spaced form")]
    NonCanonicalSpelling {
        /// The kind the spelling belongs to.
        kind: TokenKind,
        /// The rejected spelling.
        spelling: String,
    },
}

/// Result type for tokenisation.
pub type Result<T> = std::result::Result<T, LexError>;
