//! Logging setup for the CLI.
//!
//! Structured logging via the `tracing` ecosystem. Verbosity order:
//! `--verbose` (debug for nextshift crates), `--quiet` (errors only),
//! `RUST_LOG`, then the info-level default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("nextshift=debug,nextshift_cli=debug")
    } else if quiet {
        EnvFilter::new("nextshift=error,nextshift_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("nextshift=info,nextshift_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color);

    // try_init: tests may install a subscriber more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
