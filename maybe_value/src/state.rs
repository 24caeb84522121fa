//! Discriminant naming which of the four states a [`Maybe`](crate::Maybe)
//! holds.

use std::fmt;

/// The active state of a [`Maybe`](crate::Maybe).
///
/// # Examples
///
/// ```
/// use maybe_value::{Maybe, State};
///
/// let maybe: Maybe<i32> = Maybe::from_message("still warming up");
/// assert_eq!(maybe.state(), State::Message);
/// assert_eq!(maybe.state().to_string(), "message");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// A value of the container's value type is present.
    Value,
    /// No value was produced and none was expected.
    Null,
    /// No value was produced; an informational message explains why.
    Message,
    /// No value was produced because the producer failed.
    Error,
}

impl State {
    /// Lower-case name used when rendering the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Null => "null",
            Self::Message => "message",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
