//! Container map and keyword table used to split and classify a query.
//!
//! Supporting more SQL means adding rows to [`CONTAINERS`] or [`KEYWORDS`];
//! the splitter and builder only ever consult a validated [`Vocabulary`].

use std::collections::HashMap;
use std::sync::LazyLock;

use super::TokenKind;
use crate::error::VocabularyError;

/// A delimited span whose interior is captured verbatim as one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    /// Character that opens the container.
    pub open: char,
    /// Character that closes it.
    pub close: char,
    /// Kind of the token built from the finished container.
    pub kind: TokenKind,
}

impl Container {
    /// Creates a container definition.
    #[must_use]
    pub const fn new(open: char, close: char, kind: TokenKind) -> Self {
        Self { open, close, kind }
    }

    /// Returns true for quote-style containers that open and close on the
    /// same character.
    #[must_use]
    pub const fn is_symmetric(&self) -> bool {
        self.open == self.close
    }
}

/// Standard containers.
pub const CONTAINERS: &[Container] = &[
    Container::new('\'', '\'', TokenKind::StringValue),
    Container::new('"', '"', TokenKind::StringValue),
    Container::new('[', ']', TokenKind::EscapedValue),
    Container::new('{', '}', TokenKind::PlaceholderValue),
    Container::new('`', '`', TokenKind::EscapedValue),
    Container::new('(', ')', TokenKind::Expression),
];

/// Standard keyword table: each kind with its lowercase spellings. A
/// multi-word spelling matches the same words separated by any whitespace.
pub const KEYWORDS: &[(TokenKind, &[&str])] = &[
    (TokenKind::Select, &["select"]),
    (TokenKind::From, &["from"]),
    (TokenKind::As, &["as"]),
    (TokenKind::Where, &["where"]),
    (TokenKind::InnerJoin, &["join", "inner join"]),
    (TokenKind::LeftJoin, &["left join"]),
    (TokenKind::RightJoin, &["right join"]),
    (TokenKind::JoinOn, &["on"]),
    (TokenKind::GroupBy, &["group by"]),
    (TokenKind::OrderBy, &["order by"]),
    (TokenKind::Limit, &["limit"]),
    (TokenKind::And, &["and"]),
    (TokenKind::Or, &["or"]),
    (TokenKind::Like, &["like"]),
    (TokenKind::Between, &["between"]),
    (TokenKind::Not, &["not"]),
    (TokenKind::Equals, &["="]),
    (TokenKind::NotEquals, &["<>"]),
    (TokenKind::GreaterThan, &[">"]),
    (TokenKind::GreaterThanOrEqual, &[">="]),
    (TokenKind::LessThan, &["<"]),
    (TokenKind::LessThanOrEqual, &["<="]),
    (TokenKind::Sum, &["sum"]),
    (TokenKind::Count, &["count"]),
    (TokenKind::IsNull, &["is null"]),
    (TokenKind::IsNotNull, &["is not null"]),
];

/// Characters that always form a fragment of their own outside containers
/// and numeric literals.
pub const BREAKING_CHARS: &[char] = &[',', '.'];

/// Characters grouped into operator runs, so `a>=1` splits like `a >= 1`.
pub const OPERATOR_CHARS: &[char] = &['=', '<', '>', '!'];

/// Toggles the escape flag for the following character.
pub const ESCAPE_CHAR: char = '\\';

/// A single trailing terminator is dropped before scanning.
pub const STATEMENT_TERMINATOR: char = ';';

static STANDARD: LazyLock<Result<Vocabulary, VocabularyError>> =
    LazyLock::new(|| Vocabulary::new(CONTAINERS, KEYWORDS));

/// A validated container map and keyword index.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    containers: Vec<Container>,
    keywords: HashMap<String, TokenKind>,
    /// Word count of the longest spelling.
    max_words: usize,
}

impl Vocabulary {
    /// Builds a vocabulary from a container list and a keyword table.
    ///
    /// # Errors
    ///
    /// Returns a [`VocabularyError`] if a character opens two containers, a
    /// spelling is not lowercase and single-spaced, or one spelling is listed
    /// for two different kinds.
    pub fn new(
        containers: &[Container],
        keywords: &[(TokenKind, &[&str])],
    ) -> Result<Self, VocabularyError> {
        for (i, container) in containers.iter().enumerate() {
            if containers[..i].iter().any(|c| c.open == container.open) {
                return Err(VocabularyError::DuplicateContainer {
                    open: container.open,
                });
            }
        }

        let mut index = HashMap::new();
        let mut max_words = 0;
        for &(kind, spellings) in keywords {
            for &spelling in spellings {
                if !is_canonical(spelling) {
                    return Err(VocabularyError::NonCanonicalSpelling {
                        kind,
                        spelling: spelling.to_string(),
                    });
                }
                max_words = max_words.max(spelling.split(' ').count());
                match index.insert(spelling.to_string(), kind) {
                    Some(first) if first != kind => {
                        return Err(VocabularyError::AmbiguousKeyword {
                            spelling: spelling.to_string(),
                            first,
                            second: kind,
                        });
                    }
                    _ => {}
                }
            }
        }

        Ok(Self {
            containers: containers.to_vec(),
            keywords: index,
            max_words,
        })
    }

    /// Returns the shared vocabulary built from [`CONTAINERS`] and
    /// [`KEYWORDS`].
    ///
    /// # Errors
    ///
    /// Returns the validation error if the standard tables are inconsistent.
    pub fn standard() -> Result<&'static Self, VocabularyError> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Returns the container opened by `c`, if any.
    #[must_use]
    pub fn container_opened_by(&self, c: char) -> Option<&Container> {
        self.containers.iter().find(|container| container.open == c)
    }

    /// Looks up an already folded, single-space-joined spelling.
    #[must_use]
    pub fn keyword(&self, folded: &str) -> Option<TokenKind> {
        self.keywords.get(folded).copied()
    }

    /// Returns how many words the longest spelling has.
    #[must_use]
    pub const fn max_words(&self) -> usize {
        self.max_words
    }

    /// Returns the container definitions.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Iterates over every known spelling and the kind it maps to.
    pub fn spellings(&self) -> impl Iterator<Item = (&str, TokenKind)> + '_ {
        self.keywords
            .iter()
            .map(|(spelling, kind)| (spelling.as_str(), *kind))
    }
}

fn is_canonical(spelling: &str) -> bool {
    spelling.to_lowercase() == spelling
        && spelling
            .split(' ')
            .all(|word| !word.is_empty() && !word.contains(char::is_whitespace))
}
