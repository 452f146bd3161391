//! Minimal JSON literal readers.
//!
//! Embed literals are written as a JSON-like object of string properties.
//! Only two shapes are needed to read them: a string value (`"..."`) and a
//! single `"name": "value"` property. Escapes are recognized so that an
//! escaped quote does not end a string, but content is passed through
//! verbatim (never unescaped, never allocated).

use crate::span::trim_start;

/// Shortest possible property: `"":""`.
const MIN_PROPERTY_LEN: usize = 5;

/// Shortest possible property tail once the name is read: `:""`.
const MIN_PROPERTY_TAIL_LEN: usize = 3;

/// A `"name": "value"` property read from the head of a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Property<'a> {
    /// Raw content of the name literal (without quotes).
    pub name: &'a str,
    /// Raw content of the value literal (without quotes).
    pub value: &'a str,
    /// Bytes consumed, from any leading whitespace through the closing quote
    /// of the value.
    pub len: usize,
}

/// Read a `"..."` string literal from the head of `s`.
///
/// A backslash escapes exactly the following character. Returns the content
/// between the quotes and the bytes consumed including both quotes, or
/// `None` if `s` does not start with a complete string literal.
pub fn parse_string_value(s: &str) -> Option<(&str, usize)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'"' {
        return None;
    }

    let mut pos = 1;
    while pos < bytes.len() {
        let off = memchr::memchr2(b'"', b'\\', &bytes[pos..])?;
        let at = pos + off;
        if bytes[at] == b'"' {
            return Some((&s[1..at], at + 1));
        }
        // Backslash: skip it and the first byte of the escaped character.
        // Continuation bytes can never match an ASCII needle.
        pos = at + 2;
    }
    None
}

/// Read one `<ws>"name"<ws>:<ws>"value"` property from the head of `s`.
///
/// Trailing whitespace after the value is left unconsumed. Returns `None`
/// on any mismatch: missing opening quote, missing colon, or a malformed
/// value literal.
pub fn parse_property_head(s: &str) -> Option<Property<'_>> {
    if s.len() < MIN_PROPERTY_LEN {
        return None;
    }

    // ____ "name" ____ : ____ "value"
    // <c1>|<-c2->|<c3>| |<c4>|<--c5->
    let (rest, leading) = trim_start(s);
    let (name, name_len) = parse_string_value(rest)?;

    let (rest, before_colon) = trim_start(&rest[name_len..]);
    if rest.len() < MIN_PROPERTY_TAIL_LEN || !rest.starts_with(':') {
        return None;
    }

    let (rest, after_colon) = trim_start(&rest[1..]);
    let (value, value_len) = parse_string_value(rest)?;

    Some(Property {
        name,
        value,
        len: leading + name_len + before_colon + 1 + after_colon + value_len,
    })
}
