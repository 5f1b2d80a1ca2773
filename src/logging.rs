//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the game on stdout.
//! Filtering follows `RUST_LOG`, defaulting to warnings only.

use tracing_subscriber::EnvFilter;

use crate::error::{GameError, Result};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Call once, from `main`.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .map_err(|e| GameError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}
