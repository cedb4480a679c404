//! Diagnostic logging.
//!
//! User-facing progress goes through [`crate::report`]. This module only wires
//! `tracing` events from the library to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `ansible_readme=trace`.
pub const LOG_ENV: &str = "ANSIBLE_README_LOG";

/// Filter used when [`LOG_ENV`] is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "ansible_readme=debug"
    } else {
        "warn"
    }
}

/// Installs the stderr subscriber. Safe to call more than once.
pub fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(err) = installed {
        // Already installed, e.g. by a test harness. Keep using it.
        tracing::debug!(error = %err, "tracing subscriber already initialized");
    }
}
