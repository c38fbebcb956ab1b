//! Fragment splitter: the first tokenisation phase.
//!
//! Walks the query one character at a time and cuts it into fragments. A
//! fragment is a whole container literal, a breaking character, a numeric
//! run, an operator run or a run of plain characters. Whitespace only
//! separates fragments and never appears in one outside a container.

use tracing::trace;

use super::vocabulary::{
    Container, Vocabulary, BREAKING_CHARS, ESCAPE_CHAR, OPERATOR_CHARS, STATEMENT_TERMINATOR,
};
use super::Span;
use crate::error::{LexError, Result};

/// A minimal piece of the query, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fragment<'a> {
    /// The fragment text.
    pub text: &'a str,
    /// Where the fragment sits in the original input.
    pub span: Span,
}

impl<'a> Fragment<'a> {
    /// Creates a fragment.
    #[must_use]
    pub const fn new(text: &'a str, span: Span) -> Self {
        Self { text, span }
    }

    /// Returns true if the fragment is made of digits and at most the
    /// decimal points a numeric run allows. A lone `.` is not numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !self.text.is_empty()
            && self.text != "."
            && self.text.chars().all(|c| c.is_ascii_digit() || c == '.')
    }
}

/// Class of the plain (non-container) text being accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run {
    Plain,
    Numeric,
    Operator,
}

/// A delimiter recognised at the current position.
enum Delimiter {
    Open(Container),
    Close,
}

/// Splits one query into fragments.
///
/// All scanning state lives in this value and is consumed by
/// [`Splitter::split`].
pub struct Splitter<'a, 'v> {
    /// The original query text.
    input: &'a str,
    vocabulary: &'v Vocabulary,
    fragments: Vec<Fragment<'a>>,
    /// Byte offset where the pending fragment starts.
    start: Option<usize>,
    /// The open container and the offset of its opening delimiter.
    container: Option<(Container, usize)>,
    escaped: bool,
    /// Offset of the most recent escape character.
    escape_at: usize,
    run: Run,
}

impl<'a, 'v> Splitter<'a, 'v> {
    /// Creates a splitter for `input`.
    #[must_use]
    pub const fn new(input: &'a str, vocabulary: &'v Vocabulary) -> Self {
        Self {
            input,
            vocabulary,
            fragments: Vec::new(),
            start: None,
            container: None,
            escaped: false,
            escape_at: 0,
            run: Run::Plain,
        }
    }

    /// Splits the query into fragments.
    ///
    /// Surrounding whitespace and one trailing `;` are ignored. Spans refer to
    /// the untrimmed input.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidNumeric`] when a numeric run holds a second
    /// `.`, [`LexError::UnterminatedContainer`] when the input ends inside a
    /// container and [`LexError::UnterminatedEscape`] when it ends with an
    /// escape pending.
    pub fn split(mut self) -> Result<Vec<Fragment<'a>>> {
        let (base, body) = trim_query(self.input);

        for (offset, c) in body.char_indices() {
            let pos = base + offset;
            if c == ESCAPE_CHAR {
                self.escaped = !self.escaped;
                self.escape_at = pos;
                self.scan(pos, c)?;
            } else {
                self.scan(pos, c)?;
                self.escaped = false;
            }
        }

        if let Some((container, position)) = self.container {
            return Err(LexError::UnterminatedContainer {
                open: container.open,
                close: container.close,
                position,
            });
        }
        if self.escaped {
            return Err(LexError::UnterminatedEscape {
                position: self.escape_at,
            });
        }

        self.flush(base + body.len());
        Ok(self.fragments)
    }

    fn scan(&mut self, pos: usize, c: char) -> Result<()> {
        let end = pos + c.len_utf8();

        if let Some(delimiter) = self.delimiter(c) {
            self.run = Run::Plain;
            match delimiter {
                Delimiter::Close => {
                    self.flush(end);
                    self.container = None;
                }
                Delimiter::Open(container) => {
                    self.flush(pos);
                    self.start = Some(pos);
                    self.container = Some((container, pos));
                }
            }
            return Ok(());
        }

        // Containers swallow everything up to their own close character.
        if self.container.is_some() {
            self.extend(pos);
            return Ok(());
        }

        if c.is_whitespace() {
            self.flush(pos);
            self.run = Run::Plain;
            return Ok(());
        }

        if c.is_ascii_digit() {
            if self.run != Run::Numeric {
                self.flush(pos);
                self.run = Run::Numeric;
            }
            self.extend(pos);
            return Ok(());
        }

        if self.run == Run::Numeric {
            if c == '.' {
                let fragment = self.pending(pos);
                if fragment.contains('.') {
                    return Err(LexError::InvalidNumeric {
                        character: c,
                        fragment: fragment.to_string(),
                        position: pos,
                    });
                }
                self.extend(pos);
                return Ok(());
            }
            self.flush(pos);
            self.run = Run::Plain;
        }

        if OPERATOR_CHARS.contains(&c) {
            if self.run != Run::Operator {
                self.flush(pos);
                self.run = Run::Operator;
            }
            self.extend(pos);
            return Ok(());
        }

        if self.run == Run::Operator {
            self.flush(pos);
            self.run = Run::Plain;
        }

        if BREAKING_CHARS.contains(&c) {
            self.flush(pos);
            self.start = Some(pos);
            self.flush(end);
            return Ok(());
        }

        self.extend(pos);
        Ok(())
    }

    /// Decides whether `c` opens or closes a container. Escaped characters
    /// never do, and an open container only reacts to its own close.
    fn delimiter(&self, c: char) -> Option<Delimiter> {
        if self.escaped {
            return None;
        }
        match self.container {
            Some((container, _)) => (c == container.close).then_some(Delimiter::Close),
            None => self
                .vocabulary
                .container_opened_by(c)
                .map(|container| Delimiter::Open(*container)),
        }
    }

    /// Adds the character at `pos` to the pending fragment.
    fn extend(&mut self, pos: usize) {
        self.start.get_or_insert(pos);
    }

    /// Returns the pending fragment text up to `end`.
    fn pending(&self, end: usize) -> &'a str {
        let input = self.input;
        self.start.map_or("", |start| &input[start..end])
    }

    /// Emits the pending fragment, ending at `end`, if there is one.
    fn flush(&mut self, end: usize) {
        if let Some(start) = self.start.take() {
            let input = self.input;
            let text = &input[start..end];
            trace!(fragment = text, start, end, "split fragment");
            self.fragments.push(Fragment::new(text, Span::new(start, end)));
        }
    }
}

/// Returns the offset of the text to scan and the text itself.
fn trim_query(input: &str) -> (usize, &str) {
    let trimmed = input.trim();
    let base = input.len() - input.trim_start().len();
    let body = trimmed
        .strip_suffix(STATEMENT_TERMINATOR)
        .unwrap_or(trimmed);
    (base, body)
}
