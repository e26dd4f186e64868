//! Tracing initialization for developer diagnostics.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing`; `--debug` raises the default level so normal runs
/// stay quiet on stderr.
pub fn init_tracing(debug: bool) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}
