//! Test helpers shared across crates.
//!
//! The helpers do not depend on `maybe_value`, so unit tests inside that
//! crate can use them without pulling in a second copy of its types.

pub mod errors;
pub mod output;
