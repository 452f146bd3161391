//! Lexer for msgmark chat message markup.
//!
//! Splits message text into [`Token`]s: plain text runs, `:stamp:` references,
//! `!{...}` user/group/channel embeds, and auto-detected URLs. Tokens are
//! borrowed views into the message buffer and are produced lazily.
//!
//! # Layers
//!
//! - [`parse_head`]: reads exactly one token from the head of a string
//! - [`RawTokens`]: drives `parse_head` across a message
//! - [`Tokens`]: the public stream, with adjacent text runs merged
//!
//! ```text
//! "hi :wave: //example.com"
//!   -> Text("hi ") Stamp(":wave:") Text(" ") Url("//example.com")
//! ```

mod embed;
mod error;
mod head;
mod link;
mod token;
mod tokens;

pub use embed::{EmbedKind, EmbedValue, MIN_EMBED_LEN};
pub use error::TokenError;
pub use head::parse_head;
pub use link::UrlValue;
pub use token::{Token, TokenKind, TokenValue};
pub use tokens::{RawTokens, Tokens};

/// Tokenize a message, merging adjacent text runs.
///
/// The returned iterator borrows `source`; call this again (or
/// [`Tokens::restart`]) to enumerate from the beginning.
#[tracing::instrument(level = "trace", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}

/// Tokenize a message without merging text runs.
///
/// Exposes the head-parser's own boundaries, which split text at
/// script and punctuation changes.
pub fn raw_tokens(source: &str) -> RawTokens<'_> {
    RawTokens::new(source)
}
