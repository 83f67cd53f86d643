//! Tracing setup. Logs go to stderr so stdout stays clean for plans and JSON.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins; otherwise `warn`, or `info` with `--verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
