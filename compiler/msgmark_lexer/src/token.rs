//! Token model.
//!
//! A [`Token`] is a borrowed slice of the message plus a [`TokenValue`]
//! carrying the kind-specific payload. Text content and stamp names are not
//! stored: they are re-derived from the raw slice on demand.

use std::fmt;

use crate::{EmbedValue, TokenError, UrlValue};

/// Discriminant of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TokenKind {
    /// Plain text, including whitespace and markup that failed to parse.
    Text,
    /// `:name:` stamp reference.
    Stamp,
    /// `!{...}` user, group, or channel embed.
    Embed,
    /// Auto-detected `http://`, `https://`, or `//` link.
    Url,
}

impl TokenKind {
    /// Lowercase name used in messages and dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Stamp => "stamp",
            TokenKind::Embed => "embed",
            TokenKind::Url => "url",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific payload of a [`Token`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue<'a> {
    Text,
    Stamp,
    Embed(EmbedValue<'a>),
    Url(UrlValue),
}

impl TokenValue<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Text => TokenKind::Text,
            TokenValue::Stamp => TokenKind::Stamp,
            TokenValue::Embed(_) => TokenKind::Embed,
            TokenValue::Url(_) => TokenKind::Url,
        }
    }
}

/// One classified unit of a message.
///
/// `raw` is the exact source slice the token was read from, so the raw
/// slices of a full token stream concatenate back to the message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    raw: &'a str,
    value: TokenValue<'a>,
}

impl<'a> Token<'a> {
    /// # Contract
    ///
    /// A `Stamp` token's `raw` must be `:name:` with a non-empty name.
    pub(crate) fn new(raw: &'a str, value: TokenValue<'a>) -> Self {
        debug_assert!(
            !matches!(value, TokenValue::Stamp)
                || (raw.len() >= 3 && raw.starts_with(':') && raw.ends_with(':')),
            "malformed stamp slice {raw:?}"
        );
        Self { raw, value }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    /// The source slice this token was read from.
    #[inline]
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Length of the raw slice in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn value(&self) -> &TokenValue<'a> {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> TokenValue<'a> {
        self.value
    }

    /// Text content of a `Text` token.
    pub fn as_text(&self) -> Result<&'a str, TokenError> {
        match self.value {
            TokenValue::Text => Ok(self.raw),
            _ => Err(self.wrong_kind(TokenKind::Text)),
        }
    }

    /// Name of a `Stamp` token, without the surrounding colons.
    pub fn stamp_name(&self) -> Result<&'a str, TokenError> {
        match self.value {
            TokenValue::Stamp => Ok(&self.raw[1..self.raw.len() - 1]),
            _ => Err(self.wrong_kind(TokenKind::Stamp)),
        }
    }

    /// Payload of an `Embed` token.
    pub fn embed(&self) -> Result<&EmbedValue<'a>, TokenError> {
        match &self.value {
            TokenValue::Embed(embed) => Ok(embed),
            _ => Err(self.wrong_kind(TokenKind::Embed)),
        }
    }

    /// Payload of a `Url` token.
    pub fn url(&self) -> Result<&UrlValue, TokenError> {
        match &self.value {
            TokenValue::Url(url) => Ok(url),
            _ => Err(self.wrong_kind(TokenKind::Url)),
        }
    }

    fn wrong_kind(&self, expected: TokenKind) -> TokenError {
        TokenError::WrongKind {
            expected,
            found: self.kind(),
        }
    }
}
