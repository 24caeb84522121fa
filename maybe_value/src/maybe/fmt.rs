//! Rendering of containers for display.

use std::fmt;

use super::Maybe;

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Maybe<T, E> {
    /// Renders the value, the message text, the error, or `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Null => f.write_str("null"),
            Self::Message(message) => f.write_str(message),
            Self::Error(error) => error.fmt(f),
        }
    }
}
