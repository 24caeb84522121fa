//! Extensions for lifting standard `Result` and `Option` values into a
//! [`Maybe`].
//!
//! - Use [`MaybeResultExt::into_maybe`] when a fallible call already returns
//!   `Result<T, E>`; `Err` becomes the container's error payload.
//! - Use [`MaybeOptionExt::into_maybe`] when absence is expected; `None`
//!   becomes the null marker.
//!
//! # Examples
//!
//! ```
//! use maybe_value::{Maybe, MaybeOptionExt, MaybeResultExt};
//!
//! let parsed: Maybe<u8, std::num::ParseIntError> = "7".parse::<u8>().into_maybe();
//! assert_eq!(parsed, 7);
//!
//! let missing: Maybe<u8> = None.into_maybe();
//! assert!(missing.is_null());
//! ```

use crate::Maybe;

/// Converts a `Result<T, E>` into a [`Maybe`] whose error payload is `F`.
pub trait MaybeResultExt<T, E> {
    /// Convert `Ok` into a value and `Err` into an error payload, using
    /// `Into<F>` for the error.
    fn into_maybe<F>(self) -> Maybe<T, F>
    where
        E: Into<F>;
}

impl<T, E> MaybeResultExt<T, E> for Result<T, E> {
    fn into_maybe<F>(self) -> Maybe<T, F>
    where
        E: Into<F>,
    {
        match self {
            Ok(value) => Maybe::Value(value),
            Err(error) => Maybe::from_error(error),
        }
    }
}

/// Converts an `Option<T>` into a [`Maybe`].
pub trait MaybeOptionExt<T> {
    /// Convert `Some` into a value and `None` into the null marker.
    fn into_maybe<E>(self) -> Maybe<T, E>;
}

impl<T> MaybeOptionExt<T> for Option<T> {
    fn into_maybe<E>(self) -> Maybe<T, E> {
        self.map_or_else(Maybe::null, Maybe::Value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use test_helpers::errors::SampleError;

    use super::{MaybeOptionExt, MaybeResultExt};
    use crate::{Maybe, State};

    #[rstest]
    #[case(Ok(5), State::Value)]
    #[case(Err(SampleError::new("boom")), State::Error)]
    fn lifts_results(#[case] input: Result<u32, SampleError>, #[case] expected: State) {
        let maybe: Maybe<u32, SampleError> = input.into_maybe();
        assert_eq!(maybe.state(), expected);
    }

    #[test]
    fn boxes_result_errors_into_the_default_payload() {
        let input: Result<u32, SampleError> = Err(SampleError::new("boxed"));
        let maybe: Maybe<u32> = input.into_maybe();
        let error = maybe.error().map(ToString::to_string);
        assert_eq!(error.as_deref(), Some("sample failure: boxed"));
    }

    #[rstest]
    #[case(Some(0), State::Value)]
    #[case(None, State::Null)]
    fn lifts_options(#[case] input: Option<i32>, #[case] expected: State) {
        let maybe: Maybe<i32> = input.into_maybe();
        assert_eq!(maybe.state(), expected);
    }
}
