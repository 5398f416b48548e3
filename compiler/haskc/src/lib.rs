//! Command-line driver for the hask lexer.
//!
//! The binary in `main.rs` only parses the command word and exits with the
//! status returned from here; everything else lives in this library so it can
//! be driven from tests with in-memory writers.

use std::sync::Once;

pub mod commands;
mod error;
pub mod options;
pub mod problem;

pub use error::CliError;
pub use options::{parse_options, Options, OutputFormat};

/// Exit status for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit status when the source has lexical errors.
pub const EXIT_LEX_ERRORS: i32 = 1;
/// Exit status for usage and I/O errors.
pub const EXIT_CLI_ERROR: i32 = 2;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=hask_lexer=debug` or
/// `RUST_LOG=hask_lexer=trace` (one event per token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(tree)
                .with(filter)
                .try_init();
        }
    });
}
