//! Extraction of a bare value from a container.

use super::Maybe;
use crate::{MaybeError, MaybeResult};

impl<T, E> Maybe<T, E> {
    /// Borrows the value.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::InvalidCoercion`] when the container is in any
    /// state other than [`State::Value`](crate::State::Value). No default
    /// value is substituted.
    pub const fn value(&self) -> MaybeResult<&T> {
        match self {
            Self::Value(value) => Ok(value),
            _ => Err(self.coercion_error()),
        }
    }

    /// Consumes the container and returns the value.
    ///
    /// The error payload of a [`Maybe::Error`] container is dropped, not
    /// returned in place of the coercion failure; take it first with
    /// [`Maybe::into_error`] if it is needed.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeError::InvalidCoercion`] when the container does not
    /// hold a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_value::{Maybe, MaybeError, State};
    ///
    /// let text: Maybe<String> = Maybe::from_value(String::from("A piece of text"));
    /// assert_eq!(text.into_value().as_deref(), Ok("A piece of text"));
    ///
    /// let failed: Maybe<String> = Maybe::from_error(std::fmt::Error);
    /// assert_eq!(
    ///     failed.into_value(),
    ///     Err(MaybeError::InvalidCoercion { state: State::Error })
    /// );
    /// ```
    pub fn into_value(self) -> MaybeResult<T> {
        match self {
            Self::Value(value) => Ok(value),
            other => Err(other.coercion_error()),
        }
    }

    const fn coercion_error(&self) -> MaybeError {
        MaybeError::InvalidCoercion {
            state: self.state(),
        }
    }
}

impl<T, E> From<Maybe<T, E>> for MaybeResult<T> {
    /// Lets a container flow into code that expects `Result<T, MaybeError>`.
    fn from(maybe: Maybe<T, E>) -> Self {
        maybe.into_value()
    }
}
