//! Head parser: reads exactly one token from the head of a string.
//!
//! # Rules (first match wins)
//!
//! 1. Empty input: no token.
//! 2. Leading whitespace: a text run covering the whole whitespace run.
//! 3. At most two characters left: one text run (too short for any markup).
//! 4. `:name:` stamp.
//! 5. `!{...}` embed.
//! 6. `http://`, `https://`, or `//` link.
//! 7. Plain text, up to the next `:` or change of [`CharClass`].
//!
//! Every rule consumes at least one character of non-empty input, which
//! bounds a full tokenization at one call per character.

use msgmark_lexer_core::{is_stamp_char, trim_start, CharClass};

use crate::{EmbedValue, Token, TokenValue, UrlValue};

/// Read one token from the head of `s`.
///
/// Returns `None` only for empty input. The token's raw slice is always a
/// prefix of `s`, so [`Token::len`] is the number of bytes consumed.
pub fn parse_head(s: &str) -> Option<Token<'_>> {
    let mut chars = s.chars();
    let first = chars.next()?;

    if first.is_whitespace() {
        let (_, len) = trim_start(s);
        return Some(Token::new(&s[..len], TokenValue::Text));
    }

    // `first` is consumed, so this looks at the third character.
    if chars.nth(1).is_none() {
        return Some(Token::new(s, TokenValue::Text));
    }

    if first == ':' {
        if let Some(len) = scan_stamp(s) {
            return Some(Token::new(&s[..len], TokenValue::Stamp));
        }
    } else {
        if let Some((embed, len)) = EmbedValue::parse_head(s) {
            return Some(Token::new(&s[..len], TokenValue::Embed(embed)));
        }
        if let Some((url, len)) = UrlValue::parse_head(s) {
            return Some(Token::new(&s[..len], TokenValue::Url(url)));
        }
    }

    let len = scan_text_run(s);
    Some(Token::new(&s[..len], TokenValue::Text))
}

/// Length of a `:name:` stamp at the head of `s`, including both colons.
fn scan_stamp(s: &str) -> Option<usize> {
    let mut chars = s.char_indices().skip(1);
    let (_, c) = chars.next()?;
    if !is_stamp_char(c) {
        return None;
    }
    for (i, c) in chars {
        if c == ':' {
            return Some(i + 1);
        }
        if !is_stamp_char(c) {
            return None;
        }
    }
    None
}

/// Length of the plain text run at the head of `s`.
///
/// The first character is always included. The run stops before a `:` or
/// before the first character whose class differs from the previous one. A
/// backslash counts as ASCII punctuation and escapes the next character,
/// which is taken without being classified.
fn scan_text_run(s: &str) -> usize {
    let mut chars = s.char_indices();
    let Some((_, first)) = chars.next() else {
        return 0;
    };
    let mut prev = CharClass::of(first);
    let mut escaping = first == '\\';

    for (i, c) in chars {
        if escaping {
            escaping = false;
            continue;
        }
        if c == '\\' {
            prev = CharClass::AsciiOther;
            escaping = true;
            continue;
        }
        if c == ':' || CharClass::of(c) != prev {
            return i;
        }
    }
    s.len()
}
