//! `msgmark lex`: dump the tokens of a message.
//!
//! Text output is one line per token:
//!
//! ```text
//! text  @ 0..3  "hi "
//! stamp @ 3..9  wave
//! ```
//!
//! With `--json` each line is a [`TokenRecord`] instead.

use std::fmt;
use std::io::{self, Write};

use msgmark_lexer::{raw_tokens, tokenize, EmbedKind, Token, TokenError, TokenKind, TokenValue};
use serde::Serialize;
use tracing::debug;

use super::read_source;
use crate::LexOptions;

/// Failure of the `lex` command.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("cannot encode token: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

/// One token as printed by `msgmark lex`.
///
/// `start..end` is the token's byte range in the message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub raw: &'a str,
    /// Stamp name, for stamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stamp: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<EmbedRecord<'a>>,
    /// Rendered link target, for URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedRecord<'a> {
    pub kind: EmbedKind,
    pub id: String,
    pub display_text: &'a str,
}

impl<'a> TokenRecord<'a> {
    /// Describe `token`, which starts at byte `start` of the message.
    ///
    /// Scheme-less links are rendered with `default_scheme`.
    pub fn new(token: &Token<'a>, start: usize, default_scheme: &str) -> Result<Self, TokenError> {
        let mut record = Self {
            kind: token.kind(),
            start,
            end: start + token.len(),
            raw: token.raw(),
            stamp: None,
            embed: None,
            url: None,
        };
        match token.value() {
            TokenValue::Text => {}
            TokenValue::Stamp => record.stamp = Some(token.stamp_name()?),
            TokenValue::Embed(embed) => {
                record.embed = Some(EmbedRecord {
                    kind: embed.kind(),
                    id: embed.id().to_string(),
                    display_text: embed.display_text(),
                });
            }
            TokenValue::Url(url) => record.url = Some(url.render(default_scheme)?.to_string()),
        }
        Ok(record)
    }
}

impl fmt::Display for TokenRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} @ {}..{}  ", self.kind.name(), self.start, self.end)?;
        if let Some(name) = self.stamp {
            f.write_str(name)
        } else if let Some(embed) = &self.embed {
            write!(f, "{} {} {:?}", embed.kind, embed.id, embed.display_text)
        } else if let Some(url) = &self.url {
            f.write_str(url)
        } else {
            write!(f, "{:?}", self.raw)
        }
    }
}

/// Write the tokens of `source` to `out` as configured by `options`.
///
/// Returns the number of tokens written.
pub fn write_tokens<W: Write>(
    out: &mut W,
    source: &str,
    options: &LexOptions,
) -> Result<usize, LexError> {
    if options.raw {
        write_records(out, raw_tokens(source), options)
    } else {
        write_records(out, tokenize(source), options)
    }
}

fn write_records<'a, W: Write>(
    out: &mut W,
    tokens: impl Iterator<Item = Token<'a>>,
    options: &LexOptions,
) -> Result<usize, LexError> {
    let mut start = 0;
    let mut count = 0;
    for token in tokens {
        let record = TokenRecord::new(&token, start, &options.default_scheme)?;
        if options.json {
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{record}")?;
        }
        start = record.end;
        count += 1;
    }
    Ok(count)
}

/// Run `msgmark lex`, exiting with status 1 on failure.
pub fn lex_file(options: &LexOptions) {
    if let Err(err) = run_lex(options) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_lex(options: &LexOptions) -> Result<(), LexError> {
    let source = read_source(options.path.as_deref())?;
    debug!(
        path = options.path.as_deref().unwrap_or("<stdin>"),
        len = source.len(),
        raw = options.raw,
        json = options.json,
        "lexing message"
    );

    let mut out = io::BufWriter::new(io::stdout().lock());
    let count = write_tokens(&mut out, &source, options)?;
    out.flush()?;

    debug!(count, "tokens written");
    Ok(())
}
