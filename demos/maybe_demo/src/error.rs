//! Error types for the `maybe-demo` binary.
//!
//! `DemoError` covers everything the binary can fail with, from container
//! coercions to logging setup, so `main` can hand one type to `color-eyre`.
//! `ArgumentError` is domain data: the producer stores it inside a container
//! instead of returning it.

use maybe_value::MaybeError;
use thiserror::Error;

/// Errors raised by the demo binary.
#[derive(Debug, Error)]
pub enum DemoError {
    /// A container was coerced into a bare value it did not hold.
    #[error(transparent)]
    Coercion(#[from] MaybeError),
    /// A showcase scenario observed behaviour other than what it documents.
    #[error("showcase check failed: {0}")]
    Check(&'static str),
    /// Writing to standard output failed.
    #[error("failed to write demo output: {0}")]
    Output(#[from] std::io::Error),
    /// The `--log-filter` directive could not be parsed.
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),
    /// A global tracing subscriber was already installed.
    #[error("failed to install the log subscriber: {0}")]
    LogInstall(String),
}

/// Result alias for demo operations.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Raised by the producer for inputs it rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("number must not be negative (got {number})")]
pub struct ArgumentError {
    /// The rejected input.
    pub number: i64,
}
