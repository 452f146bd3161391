//! Low-level text primitives for the msgmark lexer.
//!
//! Everything here works on borrowed `&str` views into one caller-owned
//! message buffer and never allocates:
//!
//! - [`concat`] / [`trim_start`]: joining and trimming source slices
//! - [`parse_string_value`] / [`parse_property_head`]: the two JSON shapes
//!   that embed literals are built from
//! - [`CharClass`]: the 3-way classification used to split plain text runs
//!
//! Offsets and consumed lengths are byte counts that always fall on `char`
//! boundaries, so they can slice the input directly.

mod char_class;
mod json;
mod span;

pub use char_class::{is_stamp_char, CharClass};
pub use json::{parse_property_head, parse_string_value, Property};
pub use span::{concat, offset_in, trim_start, SpanError};
