//! URL recognizer.
//!
//! Links start with `http://`, `https://`, or a scheme-less `//` and run to
//! the next whitespace. Scheme-less links are stored as `http` and remember
//! that the scheme was omitted, so the renderer can pick one later.

use tracing::trace;
use url::{Position, Url};

use crate::TokenError;

fn is_web_scheme(scheme: &str) -> bool {
    matches!(scheme, "http" | "https")
}

/// Payload of a URL token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UrlValue {
    /// Absolute URI; the scheme is always http or https.
    uri: Url,
    /// The source omitted the scheme (`//host/path`).
    has_no_scheme: bool,
}

impl UrlValue {
    /// Wrap an absolute http or https URI.
    pub fn new(uri: Url, has_no_scheme: bool) -> Result<Self, TokenError> {
        if !is_web_scheme(uri.scheme()) {
            return Err(TokenError::UnsupportedScheme {
                scheme: uri.scheme().to_owned(),
            });
        }
        Ok(Self { uri, has_no_scheme })
    }

    /// The stored URI. Scheme-less links are stored with `http`.
    #[inline]
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    #[inline]
    pub fn has_no_scheme(&self) -> bool {
        self.has_no_scheme
    }

    /// The URI to link to.
    ///
    /// Links written with a scheme are returned as stored. Scheme-less links
    /// get `default_scheme`: `""` and `"http"` mean http, `"https"` means
    /// https, anything else is used literally.
    pub fn render(&self, default_scheme: &str) -> Result<Url, TokenError> {
        if !self.has_no_scheme {
            return Ok(self.uri.clone());
        }

        let scheme = match default_scheme {
            "" | "http" => "http",
            other => other,
        };
        let mut uri = self.uri.clone();
        if uri.set_scheme(scheme).is_ok() {
            return Ok(uri);
        }

        // `set_scheme` refuses to switch between special and non-special
        // schemes, so rebuild the URI around the new scheme instead.
        Url::parse(&format!("{scheme}{}", &self.uri[Position::AfterScheme..])).map_err(|_| {
            TokenError::InvalidRenderScheme {
                scheme: scheme.to_owned(),
            }
        })
    }

    /// Read a link from the head of `s`.
    ///
    /// Returns the value and the bytes consumed, or `None` if `s` does not
    /// start with a link prefix or the candidate is not a valid absolute
    /// http(s) URI.
    pub fn parse_head(s: &str) -> Option<(Self, usize)> {
        let has_no_scheme = s.starts_with("//");
        if !has_no_scheme && !s.starts_with("http://") && !s.starts_with("https://") {
            return None;
        }

        let len = s.find(char::is_whitespace).unwrap_or(s.len());
        let candidate = &s[..len];
        let parsed = if has_no_scheme {
            Url::parse(&format!("http:{candidate}"))
        } else {
            Url::parse(candidate)
        };

        let uri = match parsed {
            Ok(uri) => uri,
            Err(err) => {
                trace!(%err, candidate, "url rejected");
                return None;
            }
        };
        if !is_web_scheme(uri.scheme()) {
            trace!(scheme = uri.scheme(), "url rejected: not http(s)");
            return None;
        }

        match Self::new(uri, has_no_scheme) {
            Ok(value) => Some((value, len)),
            Err(err) => unreachable!("scheme was checked before construction: {err}"),
        }
    }
}
