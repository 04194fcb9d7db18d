//! Logging setup for claimcheck
//!
//! Diagnostics go to stderr via tracing so stdout stays clean for `--json`.
//! Level comes from `RUST_LOG`, defaulting to `warn` (`debug` with --verbose).

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when RUST_LOG is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
