//! `!{...}` embed recognizer.
//!
//! An embed is a JSON-like object of string properties:
//!
//! ```text
//! !{"raw":"@alice","type":"user","id":"11111111-1111-1111-1111-111111111111"}
//! ```
//!
//! `raw`, `type`, and `id` are all required; property order and whitespace
//! don't matter, unknown properties are skipped, and a repeated key
//! overwrites the earlier value.

use std::fmt;

use msgmark_lexer_core::{parse_property_head, trim_start};
use tracing::trace;
use uuid::Uuid;

/// Inputs shorter than this are never tried as embeds.
///
/// A cheap pre-check only: every complete embed literal is longer.
pub const MIN_EMBED_LEN: usize = 29;

/// What an embed refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum EmbedKind {
    UserMention,
    GroupMention,
    Channel,
}

impl EmbedKind {
    /// Map the `type` property of an embed literal.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "user" => Some(EmbedKind::UserMention),
            "group" => Some(EmbedKind::GroupMention),
            "channel" => Some(EmbedKind::Channel),
            _ => None,
        }
    }

    /// The `type` property value for this kind.
    pub const fn type_name(self) -> &'static str {
        match self {
            EmbedKind::UserMention => "user",
            EmbedKind::GroupMention => "group",
            EmbedKind::Channel => "channel",
        }
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Payload of an embed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EmbedValue<'a> {
    display_text: &'a str,
    id: Uuid,
    kind: EmbedKind,
}

impl<'a> EmbedValue<'a> {
    pub fn new(display_text: &'a str, id: Uuid, kind: EmbedKind) -> Self {
        Self {
            display_text,
            id,
            kind,
        }
    }

    /// Content of the `raw` property, verbatim (escapes are not decoded).
    #[inline]
    pub fn display_text(&self) -> &'a str {
        self.display_text
    }

    /// The referenced user, group, or channel.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> EmbedKind {
        self.kind
    }

    /// Read an embed literal from the head of `s`.
    ///
    /// Returns the value and the bytes consumed (through the closing `}`),
    /// or `None` if `s` does not start with a complete, valid embed.
    pub fn parse_head(s: &'a str) -> Option<(Self, usize)> {
        if s.len() < MIN_EMBED_LEN || !s.starts_with("!{") {
            return None;
        }

        let mut id = None;
        let mut kind = None;
        let mut display_text = None;

        let mut pos = 2;
        loop {
            // A missing property consumes nothing; the separator check below
            // decides whether that is `{}`, a trailing comma, or garbage.
            if let Some(property) = parse_property_head(&s[pos..]) {
                match property.name {
                    "id" => match Uuid::try_parse(property.value) {
                        Ok(parsed) => id = Some(parsed),
                        Err(err) => {
                            trace!(%err, value = property.value, "embed rejected: malformed id");
                            return None;
                        }
                    },
                    "type" => match EmbedKind::from_type_name(property.value) {
                        Some(parsed) => kind = Some(parsed),
                        None => {
                            trace!(value = property.value, "embed rejected: unknown type");
                            return None;
                        }
                    },
                    "raw" => display_text = Some(property.value),
                    _ => {}
                }
                pos += property.len;
            }

            let (rest, skipped) = trim_start(&s[pos..]);
            pos += skipped;
            match rest.as_bytes().first() {
                Some(b',') => pos += 1,
                Some(b'}') => {
                    pos += 1;
                    break;
                }
                _ => {
                    trace!(pos, "embed rejected: expected `,` or `}}`");
                    return None;
                }
            }
        }

        let (Some(id), Some(kind), Some(display_text)) = (id, kind, display_text) else {
            trace!(
                has_id = id.is_some(),
                has_type = kind.is_some(),
                has_raw = display_text.is_some(),
                "embed rejected: missing property"
            );
            return None;
        };

        Some((Self::new(display_text, id, kind), pos))
    }
}
