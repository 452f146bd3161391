//! Zero-copy helpers over borrowed source slices.
//!
//! Every slice handled here is a view into one caller-owned buffer. Joining
//! two views never copies: the joined view is re-sliced from that buffer,
//! which keeps the helpers free of pointer arithmetic on the data itself.

use thiserror::Error;

/// Failure to join two source slices.
///
/// Both variants mean the caller broke the "views of one buffer, in order"
/// contract. They never describe a problem with the scanned text.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum SpanError {
    /// The second slice does not start where the first one ends.
    #[error(
        "slices are not contiguous: first ends at byte {first_end}, second starts at byte {second_start}"
    )]
    NotContiguous {
        first_end: usize,
        second_start: usize,
    },
    /// A slice is not a view into the source buffer.
    #[error("slice is not a view into the source buffer")]
    OutsideSource,
}

/// Byte offset of `part` within `source`, or `None` if `part` is not a view
/// into `source`.
///
/// Only addresses are compared; the bytes are never read.
pub fn offset_in(source: &str, part: &str) -> Option<usize> {
    let base = source.as_ptr() as usize;
    let start = (part.as_ptr() as usize).checked_sub(base)?;
    let end = start.checked_add(part.len())?;
    (end <= source.len()).then_some(start)
}

/// Join two adjacent views of `source` into one view without copying.
///
/// If either slice is empty the other one is returned unchanged. Otherwise
/// `second` must begin exactly where `first` ends.
pub fn concat<'a>(source: &'a str, first: &'a str, second: &'a str) -> Result<&'a str, SpanError> {
    if first.is_empty() {
        return Ok(second);
    }
    if second.is_empty() {
        return Ok(first);
    }

    let start = offset_in(source, first).ok_or(SpanError::OutsideSource)?;
    let second_start = offset_in(source, second).ok_or(SpanError::OutsideSource)?;
    let first_end = start + first.len();
    if first_end != second_start {
        return Err(SpanError::NotContiguous {
            first_end,
            second_start,
        });
    }

    Ok(&source[start..second_start + second.len()])
}

/// Skip a maximal leading run of Unicode whitespace.
///
/// Returns the remainder and the number of bytes skipped.
#[inline]
pub fn trim_start(s: &str) -> (&str, usize) {
    let rest = s.trim_start_matches(char::is_whitespace);
    (rest, s.len() - rest.len())
}
