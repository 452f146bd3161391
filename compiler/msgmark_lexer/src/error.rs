//! Errors reported by the token model.
//!
//! Malformed markup is never an error: recognizers simply decline and the
//! text falls back to a plain run. Everything here is a usage error by the
//! code consuming tokens.

use thiserror::Error;

use crate::TokenKind;

/// Misuse of a [`Token`](crate::Token) or [`UrlValue`](crate::UrlValue).
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum TokenError {
    /// A kind-specific accessor was called on a token of another kind.
    #[error("expected {expected} token, found {found} token")]
    WrongKind {
        expected: TokenKind,
        found: TokenKind,
    },
    /// A URL value was built from a URI whose scheme is not http or https.
    #[error("URL scheme `{scheme}` is not http or https")]
    UnsupportedScheme { scheme: String },
    /// A scheme-less URL could not be rendered with the requested scheme.
    #[error("cannot render URL with scheme `{scheme}`")]
    InvalidRenderScheme { scheme: String },
}
