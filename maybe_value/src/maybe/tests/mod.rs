//! Unit tests for the container's states, coercions, and comparisons.

use test_helpers::errors::SampleError;

use super::Maybe;

mod comparison;

type Sample<T> = Maybe<T, SampleError>;
