//! Diagnostics for the logger itself.
//!
//! Spier reports what it is doing (channel opens, closes, failures) through
//! `tracing`. Category records never go through this path.

use spier_types::{Result, SpierError};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "spier=warn";

/// Initialize diagnostics from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init_default() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter)
}

/// Initialize diagnostics with an explicit filter directive (e.g. `spier=debug`).
pub fn init_with_filter(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| SpierError::Config(format!("Invalid log filter '{}': {}", directive, e)))?;
    install(filter)
}

fn install(filter: EnvFilter) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init()
        .map_err(|e| SpierError::Config(format!("Failed to initialize diagnostics: {}", e)))
}
