//! Token types produced by the builder.

use core::fmt;

use super::vocabulary::KEYWORDS;
use super::Span;

/// The closed set of classifications a token may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Clauses
    Select,
    From,
    As,
    Where,
    GroupBy,
    OrderBy,
    Limit,

    // Joins
    InnerJoin,
    LeftJoin,
    RightJoin,
    JoinOn,

    // Conditionals
    And,
    Or,
    Like,
    Between,
    Not,
    IsNull,
    IsNotNull,

    // Comparison operators
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    // Aggregate functions
    Sum,
    Count,

    // Values
    Numeric,
    StringValue,
    EscapedValue,
    PlaceholderValue,
    Expression,

    /// A fragment that matched nothing in the keyword table.
    Unknown,
}

/// Coarse grouping of token kinds, handy for a parser deciding which
/// production a token may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenCategory {
    Clause,
    Join,
    Conditional,
    Comparison,
    Aggregate,
    Value,
    Unknown,
}

impl TokenKind {
    /// Returns the category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Select
            | Self::From
            | Self::As
            | Self::Where
            | Self::GroupBy
            | Self::OrderBy
            | Self::Limit => TokenCategory::Clause,
            Self::InnerJoin | Self::LeftJoin | Self::RightJoin | Self::JoinOn => {
                TokenCategory::Join
            }
            Self::And
            | Self::Or
            | Self::Like
            | Self::Between
            | Self::Not
            | Self::IsNull
            | Self::IsNotNull => TokenCategory::Conditional,
            Self::Equals
            | Self::NotEquals
            | Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual => TokenCategory::Comparison,
            Self::Sum | Self::Count => TokenCategory::Aggregate,
            Self::Numeric
            | Self::StringValue
            | Self::EscapedValue
            | Self::PlaceholderValue
            | Self::Expression => TokenCategory::Value,
            Self::Unknown => TokenCategory::Unknown,
        }
    }

    /// Returns the kind's name as used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::From => "From",
            Self::As => "As",
            Self::Where => "Where",
            Self::GroupBy => "GroupBy",
            Self::OrderBy => "OrderBy",
            Self::Limit => "Limit",
            Self::InnerJoin => "InnerJoin",
            Self::LeftJoin => "LeftJoin",
            Self::RightJoin => "RightJoin",
            Self::JoinOn => "JoinOn",
            Self::And => "And",
            Self::Or => "Or",
            Self::Like => "Like",
            Self::Between => "Between",
            Self::Not => "Not",
            Self::IsNull => "IsNull",
            Self::IsNotNull => "IsNotNull",
            Self::Equals => "Equals",
            Self::NotEquals => "NotEquals",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::Sum => "Sum",
            Self::Count => "Count",
            Self::Numeric => "Numeric",
            Self::StringValue => "StringValue",
            Self::EscapedValue => "EscapedValue",
            Self::PlaceholderValue => "PlaceholderValue",
            Self::Expression => "Expression",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the lowercase spellings the standard keyword table lists for
    /// this kind. Value kinds and `Unknown` have none.
    #[must_use]
    pub fn spellings(self) -> &'static [&'static str] {
        match KEYWORDS.iter().find(|(kind, _)| *kind == self) {
            Some(&(_, spellings)) => spellings,
            None => &[],
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified piece of the query.
///
/// Two tokens are equal when their kind and raw text are equal; the span is
/// positional metadata and does not take part in comparisons.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The token classification.
    pub kind: TokenKind,
    /// The source text, with multi-word keywords joined by a single space.
    pub raw: String,
    /// Where the token came from in the original input.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, raw: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            raw: raw.into(),
            span,
        }
    }

    /// Returns true if no keyword or literal rule matched this token.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self.kind, TokenKind::Unknown)
    }

    /// Returns true if this token is a literal or a parenthesised expression.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self.kind.category(), TokenCategory::Value)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.raw == other.raw
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Raw: {})", self.kind, self.raw)
    }
}
