//! Diagnostic logging.
//!
//! Standard output is reserved for the greeting itself, so log events go to
//! standard error. The filter is taken from `RUST_LOG` and defaults to
//! `warn`.

use std::io;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Does nothing if one is already set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
