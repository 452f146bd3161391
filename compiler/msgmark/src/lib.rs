//! msgmark inspection tools.
//!
//! The `msgmark` binary is a thin shell over [`commands`]; everything it does
//! is reachable from here so integration tests can drive it without spawning
//! a process.

pub mod commands;
mod options;

pub use options::{parse_lex_options, LexOptions};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Enable with `RUST_LOG=msgmark=debug` or
/// `RUST_LOG=msgmark_lexer=trace` to see why markup candidates were rejected.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
