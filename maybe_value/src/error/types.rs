//! Primary error enum for container coercions.

use thiserror::Error;

use crate::State;

/// Errors raised by [`Maybe`](crate::Maybe) itself.
///
/// Domain failures travel inside the container as its error payload; this
/// type only reports misuse of the container, such as extracting a value
/// that is not there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MaybeError {
    /// A bare value was requested from a container that does not hold one.
    #[error("cannot coerce a container in the {state} state into a value")]
    InvalidCoercion {
        /// State the container was in when the coercion was attempted.
        state: State,
    },
}

impl MaybeError {
    /// State of the container that rejected the request.
    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::InvalidCoercion { state } => *state,
        }
    }
}

/// Result alias for operations that can fail with [`MaybeError`].
pub type MaybeResult<T> = Result<T, MaybeError>;
