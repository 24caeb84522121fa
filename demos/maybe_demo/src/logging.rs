//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

use crate::error::{DemoError, Result};

/// Installs a global fmt subscriber writing to standard error.
///
/// `filter` uses `EnvFilter` directive syntax, for example `debug` or
/// `maybe_demo=trace,maybe_value=trace`.
///
/// # Errors
///
/// Returns [`DemoError::LogFilter`] when `filter` does not parse and
/// [`DemoError::LogInstall`] when a subscriber is already installed.
pub fn init(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| DemoError::LogInstall(err.to_string()))
}
