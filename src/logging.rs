//! Diagnostic tracing for the importer binary.
//!
//! Separate from the echo sink: tracing goes to stderr and is controlled by
//! `RUST_LOG`, echoed error messages go to stdout and are controlled by the
//! settings.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn`, or `importer=debug` when verbose.
pub fn init(verbose: bool) {
    let default = if verbose { "importer=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
