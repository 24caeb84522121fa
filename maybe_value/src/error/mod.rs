//! Failures produced by the container's own operations.

mod types;

pub use types::{MaybeError, MaybeResult};

#[cfg(test)]
mod tests;
