//! Logging bootstrap.
//!
//! Installs a `tracing` subscriber writing to stderr. The filter comes from
//! `RUST_LOG` when set, otherwise from the level passed by the caller.
//! Initialization happens at most once per process; later calls are no-ops.

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

/// Initializes the global subscriber with `default_level` (e.g. `"info"`).
///
/// # Errors
/// Returns an error when `default_level` is not a valid filter directive or a
/// different global subscriber is already installed.
pub fn init_logging(default_level: &str) -> Result<()> {
    LOGGING_INIT.get_or_try_init(|| -> Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))
    })?;
    Ok(())
}
