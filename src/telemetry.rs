//! Logging setup.
//!
//! Structured logging via `tracing`, filtered by `RUST_LOG` with a quiet
//! default. Logs go to stderr so they never corrupt the TUI on stdout;
//! run with `RUST_LOG=prepdrill=debug prepdrill 2>prepdrill.log` to
//! capture them.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber. Call once at startup,
/// before any other part of the app logs.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "prepdrill=debug"
    } else {
        "prepdrill=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
