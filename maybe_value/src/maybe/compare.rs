//! Value-based equality, ordering, and hashing.
//!
//! Only value-bearing containers take part in comparisons. Every other
//! state compares unequal, including against a container in the same state.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Maybe;
use crate::State;

impl<T, E> Maybe<T, E> {
    /// Compares the container against a bare value.
    ///
    /// True only when a value is present and equals `other`.
    ///
    /// ```
    /// use maybe_value::Maybe;
    ///
    /// let point: Maybe<(i32, i32)> = Maybe::from_value((1, 2));
    /// assert!(point.value_eq(&(1, 2)));
    /// assert!(!Maybe::<(i32, i32)>::null().value_eq(&(1, 2)));
    /// ```
    #[must_use]
    pub fn value_eq<U>(&self, other: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        match self {
            Self::Value(value) => value == other,
            _ => false,
        }
    }
}

impl<T: PartialEq, E> PartialEq for Maybe<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match other {
            Self::Value(value) => self.value_eq(value),
            _ => false,
        }
    }
}

impl<T: PartialOrd, E> PartialOrd for Maybe<T, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Value(lhs), Self::Value(rhs)) => lhs.partial_cmp(rhs),
            _ => None,
        }
    }
}

impl<T: Hash, E> Hash for Maybe<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Value(value) => value.hash(state),
            Self::Null => "null".hash(state),
            Self::Message(message) => message.hash(state),
            Self::Error(_) => State::Error.hash(state),
        }
    }
}

// Comparisons against bare values in both directions. A blanket
// `PartialEq<T>` would overlap with the container-to-container impl, so the
// common concrete types are listed instead.
macro_rules! bare_value_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<E> PartialEq<$ty> for Maybe<$ty, E> {
                fn eq(&self, other: &$ty) -> bool {
                    self.value_eq(other)
                }
            }

            impl<E> PartialEq<Maybe<$ty, E>> for $ty {
                fn eq(&self, other: &Maybe<$ty, E>) -> bool {
                    other.value_eq(self)
                }
            }
        )*
    };
}

bare_value_eq!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

impl<E> PartialEq<str> for Maybe<String, E> {
    fn eq(&self, other: &str) -> bool {
        self.value_eq(other)
    }
}

impl<E> PartialEq<&str> for Maybe<String, E> {
    fn eq(&self, other: &&str) -> bool {
        self.value_eq(*other)
    }
}

impl<E> PartialEq<Maybe<String, E>> for str {
    fn eq(&self, other: &Maybe<String, E>) -> bool {
        other.value_eq(self)
    }
}

impl<E> PartialEq<Maybe<String, E>> for &str {
    fn eq(&self, other: &Maybe<String, E>) -> bool {
        other.value_eq(*self)
    }
}
