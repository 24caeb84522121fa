//! Library facade for the `maybe-demo` binary so integration tests can reuse
//! the producer and showcase helpers.

pub mod cli;
pub mod error;
pub mod logging;
pub mod producer;
pub mod showcase;
