//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so they never interleave with command output on
//! stdout. The filter comes from `LAZYDB_LOG` (same syntax as `RUST_LOG`)
//! and defaults to `warn`, or `debug` with `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "LAZYDB_LOG";

/// Returns the filter directive used when `LAZYDB_LOG` is unset.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "lazydb=debug" } else { "warn" }
}

/// Installs the global tracing subscriber.
///
/// Calling this more than once is harmless: later calls are ignored.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
