//! Token streams over a message.
//!
//! [`RawTokens`] applies [`parse_head`] to the unconsumed suffix until the
//! message is exhausted. [`Tokens`] sits on top of it and joins consecutive
//! text runs, so callers never see two `Text` tokens in a row.
//!
//! Both are forward-only. To enumerate again, build a new stream over the
//! same message.

use std::iter::FusedIterator;
use std::mem;

use msgmark_lexer_core::concat;

use crate::{parse_head, Token, TokenKind, TokenValue};

/// Head-parser output, one token per step, text runs not merged.
#[derive(Clone, Debug)]
pub struct RawTokens<'a> {
    source: &'a str,
    /// Byte offset of the unconsumed suffix; always on a `char` boundary.
    pos: usize,
}

impl<'a> RawTokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for RawTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let token = parse_head(&self.source[self.pos..])?;
        self.pos += token.len();
        Some(token)
    }
}

impl FusedIterator for RawTokens<'_> {}

/// Message tokens with adjacent text runs merged.
///
/// # State
///
/// - `pending`: text read from the inner stream but not yet yielded, as one
///   joined view of the message (empty when there is none)
/// - `held`: the non-text token that ended `pending`; it is yielded on the
///   call after `pending` is flushed
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    source: &'a str,
    inner: RawTokens<'a>,
    pending: &'a str,
    held: Option<Token<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: RawTokens::new(source),
            pending: "",
            held: None,
        }
    }

    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// A fresh stream from the start of the same message.
    pub fn restart(&self) -> Tokens<'a> {
        Tokens::new(self.source)
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.held.take() {
            return Some(token);
        }

        for token in self.inner.by_ref() {
            if token.kind() == TokenKind::Text {
                self.pending = match concat(self.source, self.pending, token.raw()) {
                    Ok(joined) => joined,
                    Err(err) => unreachable!("raw tokens are consecutive slices: {err}"),
                };
                continue;
            }

            if self.pending.is_empty() {
                return Some(token);
            }
            self.held = Some(token);
            return Some(Token::new(mem::take(&mut self.pending), TokenValue::Text));
        }

        if self.pending.is_empty() {
            None
        } else {
            Some(Token::new(mem::take(&mut self.pending), TokenValue::Text))
        }
    }
}

impl FusedIterator for Tokens<'_> {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
