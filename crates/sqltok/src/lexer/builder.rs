//! Token builder: the second tokenisation phase.
//!
//! Container and numeric fragments map straight to value tokens. Everything
//! else is matched against the keyword table, longest run of fragments
//! first, so `LEFT JOIN` wins over a bare `JOIN` and `IS NOT NULL` over
//! `NOT`.

use tracing::trace;

use super::splitter::Fragment;
use super::vocabulary::Vocabulary;
use super::{Token, TokenKind};

/// Classifies `fragments` into tokens.
///
/// Never fails: a fragment that starts no keyword becomes a
/// [`TokenKind::Unknown`] token on its own, and every step consumes at least
/// one fragment.
#[must_use]
pub fn build(fragments: &[Fragment<'_>], vocabulary: &Vocabulary) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(fragments.len());
    let mut pos = 0;

    while let Some(fragment) = fragments.get(pos) {
        if let Some(kind) = container_kind(fragment, vocabulary) {
            tokens.push(Token::new(kind, fragment.text, fragment.span));
            pos += 1;
            continue;
        }

        if fragment.is_numeric() {
            tokens.push(Token::new(TokenKind::Numeric, fragment.text, fragment.span));
            pos += 1;
            continue;
        }

        let run = collect_run(&fragments[pos..], vocabulary);
        if let Some((kind, len)) = longest_match(run, vocabulary) {
            let matched = &run[..len];
            let span = matched[0].span.merge(matched[len - 1].span);
            tokens.push(Token::new(kind, join(matched), span));
            pos += len;
        } else {
            trace!(fragment = fragment.text, "no keyword matched");
            tokens.push(Token::new(TokenKind::Unknown, fragment.text, fragment.span));
            pos += 1;
        }
    }

    tokens
}

/// Returns the kind of the container `fragment` starts, judged by its first
/// character alone.
fn container_kind(fragment: &Fragment<'_>, vocabulary: &Vocabulary) -> Option<TokenKind> {
    let first = fragment.text.chars().next()?;
    vocabulary
        .container_opened_by(first)
        .map(|container| container.kind)
}

/// Returns the leading fragments that are neither containers nor numerics.
fn collect_run<'f, 'a>(
    fragments: &'f [Fragment<'a>],
    vocabulary: &Vocabulary,
) -> &'f [Fragment<'a>] {
    let len = fragments
        .iter()
        .position(|f| f.is_numeric() || container_kind(f, vocabulary).is_some())
        .unwrap_or(fragments.len());
    &fragments[..len]
}

/// Finds the longest prefix of `run` that spells a keyword, returning its kind
/// and length in fragments.
///
/// Plain fragments hold no whitespace, so a prefix longer than the longest
/// spelling (in words) can never match and is not tried.
fn longest_match(run: &[Fragment<'_>], vocabulary: &Vocabulary) -> Option<(TokenKind, usize)> {
    let longest = run.len().min(vocabulary.max_words());
    (1..=longest).rev().find_map(|len| {
        let folded = join(&run[..len]).to_lowercase();
        vocabulary.keyword(&folded).map(|kind| (kind, len))
    })
}

fn join(fragments: &[Fragment<'_>]) -> String {
    fragments
        .iter()
        .map(|f| f.text)
        .collect::<Vec<_>>()
        .join(" ")
}
