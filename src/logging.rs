//! Tracing setup
//!
//! Log lines go to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "CAESAR_WORD_LOG";

/// Initialize the tracing subscriber
///
/// Respects `CAESAR_WORD_LOG` when set. Otherwise logs at `warn`, or `debug`
/// when `verbose` is true.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
