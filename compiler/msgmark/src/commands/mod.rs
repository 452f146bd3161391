//! Command handlers for the msgmark CLI.
//!
//! Each submodule implements one command. Input handling shared between
//! commands lives here in the module root.

use std::io::{self, Read};

mod lex;

pub use lex::{lex_file, write_tokens, EmbedRecord, LexError, TokenRecord};

/// Read a whole message from `path`, or from stdin when `path` is `None`.
pub fn read_source(path: Option<&str>) -> Result<String, LexError> {
    let Some(path) = path else {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|err| read_error("<stdin>", err))?;
        return Ok(source);
    };
    std::fs::read_to_string(path).map_err(|err| read_error(path, err))
}

fn read_error(path: &str, err: io::Error) -> LexError {
    let path = path.to_string();
    match err.kind() {
        io::ErrorKind::NotFound => LexError::NotFound { path },
        io::ErrorKind::InvalidData => LexError::InvalidUtf8 { path },
        _ => LexError::Read { path, source: err },
    }
}
