//! Tracing subscriber setup
//!
//! The interactive screen owns the terminal, so trace output only goes to a
//! file, and only when one is asked for. The filter comes from
//! `FUZZPICK_LOG` (e.g. `FUZZPICK_LOG=fuzzpick=trace`), defaulting to debug
//! output for this crate.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "FUZZPICK_LOG";

const DEFAULT_DIRECTIVES: &str = "fuzzpick=debug";

/// Install the global subscriber, writing to `log_file_path`
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be created.
pub fn init(log_file_path: &Path) -> io::Result<()> {
    let log_file = File::create(log_file_path)?;
    build_subscriber(log_file).init();
    Ok(())
}

/// Filter from `FUZZPICK_LOG`, or the default directives
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Build a file-backed subscriber
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter())
}
