//! Character classes used to split plain text into runs.

/// Coarse class of a character for plain-text run splitting.
///
/// A text run never spans a change of class, so script changes and
/// word/punctuation boundaries end up in separate raw runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// `A-Z`, `a-z`, `0-9`.
    AsciiAlphanumeric = 0,
    /// Any other ASCII character (punctuation, ASCII whitespace, controls).
    AsciiOther = 1,
    /// Anything outside ASCII.
    NonAscii = 2,
}

impl CharClass {
    /// Classify a single character.
    #[inline]
    pub fn of(c: char) -> Self {
        if !c.is_ascii() {
            CharClass::NonAscii
        } else if c.is_ascii_alphanumeric() {
            CharClass::AsciiAlphanumeric
        } else {
            CharClass::AsciiOther
        }
    }
}

/// Returns `true` if `c` may appear in a stamp name (`:name:`).
///
/// Letters and digits are Unicode-aware; `-` and `_` are the only
/// punctuation allowed.
#[inline]
pub fn is_stamp_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
