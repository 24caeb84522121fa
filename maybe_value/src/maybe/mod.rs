//! The four-state container and its constructors and accessors.

mod coerce;
mod compare;
mod fmt;

use crate::State;

/// Default error payload: any thread-safe standard error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A value of type `T`, an explicit null, an informational message, or an
/// error payload of type `E`.
///
/// Exactly one variant is active and it is fixed at construction. How the
/// container was built decides its state: a zero or an empty string passed
/// to [`Maybe::from_value`] is still a value.
///
/// Equality is value-based. Two containers compare equal only when both
/// hold values that compare equal, so two `Null` containers are *not*
/// equal and `Maybe` does not implement [`Eq`].
///
/// # Examples
///
/// ```
/// use maybe_value::Maybe;
///
/// fn lookup(id: i64) -> Maybe<String> {
///     match id {
///         0 => Maybe::from_value(String::from("root")),
///         id if id < 0 => Maybe::from_error(std::io::Error::other("negative id")),
///         _ => Maybe::null(),
///     }
/// }
///
/// assert_eq!(lookup(0), "root");
/// assert!(lookup(-1).is_error());
/// assert!(lookup(7).is_null());
/// ```
#[derive(Debug, Clone)]
pub enum Maybe<T, E = BoxError> {
    /// A present value.
    Value(T),
    /// Intentionally no value and no failure.
    Null,
    /// No value, with informational text for the caller.
    Message(String),
    /// No value because the producer failed.
    Error(E),
}

impl<T, E> Maybe<T, E> {
    /// Wraps a value. The result always has [`State::Value`].
    #[must_use]
    pub const fn from_value(value: T) -> Self {
        Self::Value(value)
    }

    /// Wraps an error payload.
    ///
    /// With the default [`BoxError`] payload any `Send + Sync` standard
    /// error converts on the way in.
    #[must_use]
    pub fn from_error(error: impl Into<E>) -> Self {
        Self::Error(error.into())
    }

    /// Wraps an error payload that may be absent.
    ///
    /// An absent error means nothing went wrong, so `None` yields
    /// [`Maybe::Null`] rather than an error state. A literal `None` needs
    /// its payload type spelled out, as in `None::<E>`.
    ///
    /// ```
    /// use maybe_value::{Maybe, State};
    ///
    /// let failed: Maybe<u8> = Maybe::from_optional_error(Some(std::fmt::Error));
    /// assert_eq!(failed.state(), State::Error);
    ///
    /// let fine: Maybe<u8> = Maybe::from_optional_error(None::<std::fmt::Error>);
    /// assert!(fine.is_null());
    /// ```
    #[must_use]
    pub fn from_optional_error(error: Option<impl Into<E>>) -> Self {
        match error {
            Some(error) => Self::Error(error.into()),
            None => {
                tracing::trace!("absent error payload normalised to null");
                Self::Null
            }
        }
    }

    /// Wraps informational text. An empty string is still a message.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wraps informational text that may be absent; `None` yields
    /// [`Maybe::Null`].
    #[must_use]
    pub fn from_optional_message(message: Option<impl Into<String>>) -> Self {
        match message {
            Some(message) => Self::Message(message.into()),
            None => {
                tracing::trace!("absent message normalised to null");
                Self::Null
            }
        }
    }

    /// The null marker returned by producers that have nothing to report.
    #[must_use]
    pub const fn null() -> Self {
        Self::Null
    }

    /// Which of the four states this container holds.
    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::Value(_) => State::Value,
            Self::Null => State::Null,
            Self::Message(_) => State::Message,
            Self::Error(_) => State::Error,
        }
    }

    /// Returns `true` when a value is present.
    ///
    /// This is the container's truth value: use it wherever another
    /// language would test the container directly in a condition.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` for every state other than [`State::Value`].
    ///
    /// Null and Message count as well; use [`Maybe::is_error`] to single
    /// out the error state.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.has_value()
    }

    /// Returns `true` for the null marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` when the container carries a message.
    #[must_use]
    pub const fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Returns `true` only when the container carries an error payload.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Borrows the error payload, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows the message text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Converts `&Maybe<T, E>` into `Maybe<&T, &E>`.
    ///
    /// The message slot is always an owned `String`, so message text is
    /// cloned; value and error payloads are borrowed. Use
    /// [`Maybe::message`] to read the text without allocating.
    #[must_use]
    pub fn as_ref(&self) -> Maybe<&T, &E> {
        match self {
            Self::Value(value) => Maybe::Value(value),
            Self::Null => Maybe::Null,
            Self::Message(message) => Maybe::Message(message.clone()),
            Self::Error(error) => Maybe::Error(error),
        }
    }

    /// Maps the value, leaving the other states untouched.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U, E> {
        match self {
            Self::Value(value) => Maybe::Value(f(value)),
            Self::Null => Maybe::Null,
            Self::Message(message) => Maybe::Message(message),
            Self::Error(error) => Maybe::Error(error),
        }
    }

    /// Maps the error payload, leaving the other states untouched.
    #[must_use]
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Maybe<T, F> {
        match self {
            Self::Value(value) => Maybe::Value(value),
            Self::Null => Maybe::Null,
            Self::Message(message) => Maybe::Message(message),
            Self::Error(error) => Maybe::Error(f(error)),
        }
    }

    /// Discards every non-value state.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Takes the error payload, if any.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Takes the message text, if any.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }
}

impl<T, E> From<T> for Maybe<T, E> {
    /// Lets a producer returning `Maybe<T, E>` hand back a bare `T` with
    /// `.into()`.
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

#[cfg(test)]
mod tests;
