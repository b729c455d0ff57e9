//! Diagnostic logging setup for the command-line front end.
//!
//! Library code only emits `tracing` events. The binary installs a compact
//! stderr subscriber so stdout stays reserved for results. `RUST_LOG`
//! overrides the default filter when set.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber.
///
/// `verbose` lowers the default filter from `warn` to `debug`. Calling this
/// twice is harmless; the second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "feature_compat=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}
