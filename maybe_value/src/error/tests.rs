//! Unit tests for coercion error reporting.

use rstest::rstest;

use super::MaybeError;
use crate::State;

#[rstest]
#[case(State::Null, "cannot coerce a container in the null state into a value")]
#[case(State::Message, "cannot coerce a container in the message state into a value")]
#[case(State::Error, "cannot coerce a container in the error state into a value")]
fn renders_the_rejecting_state(#[case] state: State, #[case] expected: &str) {
    let err = MaybeError::InvalidCoercion { state };
    assert_eq!(err.to_string(), expected);
    assert_eq!(err.state(), state);
}

#[test]
fn is_a_standard_error_without_a_source() {
    let err: Box<dyn std::error::Error> =
        Box::new(MaybeError::InvalidCoercion { state: State::Null });
    assert!(err.source().is_none());
}
