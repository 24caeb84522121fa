//! Equality, ordering, hashing, and display.

use std::hash::{DefaultHasher, Hash, Hasher};

use rstest::rstest;

use super::{Sample, SampleError};
use crate::Maybe;

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn compares_with_bare_values_in_both_directions() {
    let maybe: Sample<i32> = Maybe::from_value(3);
    assert!(maybe == 3);
    assert!(3 == maybe);
    assert!(maybe != 4);
    assert!(4 != maybe);
}

#[test]
fn compares_strings_with_str_slices() {
    let maybe: Sample<String> = Maybe::from_value(String::from("42 is a great number."));
    assert!(maybe == "42 is a great number.");
    assert!("42 is a great number." == maybe);
    assert!(maybe == *"42 is a great number.");
    assert!(maybe == String::from("42 is a great number."));
}

#[rstest]
#[case(Maybe::null())]
#[case(Maybe::from_message("3"))]
#[case(Maybe::from_error(SampleError::new("3")))]
fn non_values_never_equal_a_bare_value(#[case] maybe: Sample<i32>) {
    assert!(maybe != 3);
    assert!(3 != maybe);
    assert!(!maybe.value_eq(&3));
}

#[test]
fn containers_with_equal_values_are_equal() {
    let lhs: Sample<Vec<u8>> = Maybe::from_value(vec![1, 2]);
    let rhs: Sample<Vec<u8>> = Maybe::from_value(vec![1, 2]);
    assert_eq!(lhs, rhs);
    assert_ne!(lhs, Maybe::from_value(vec![2, 1]));
}

#[rstest]
#[case(Maybe::null(), Maybe::null())]
#[case(Maybe::from_message("same"), Maybe::from_message("same"))]
#[case(Maybe::from_error(SampleError::new("same")), Maybe::from_error(SampleError::new("same")))]
#[case(Maybe::from_value(1), Maybe::null())]
#[case(Maybe::null(), Maybe::from_value(1))]
#[case(Maybe::from_message("1"), Maybe::from_value(1))]
fn non_value_states_are_unequal(#[case] lhs: Sample<i32>, #[case] rhs: Sample<i32>) {
    assert_ne!(lhs, rhs);
    assert!(lhs.partial_cmp(&rhs).is_none());
}

#[test]
#[expect(clippy::eq_op, reason = "a non-value container must be unequal to itself")]
fn null_is_unequal_to_itself() {
    let null: Sample<i32> = Maybe::null();
    assert!(null != null);
}

#[test]
fn orders_by_value() {
    let small: Sample<u8> = Maybe::from_value(1);
    let large: Sample<u8> = Maybe::from_value(9);
    assert!(small < large);
    assert!(large >= small);
}

#[test]
fn equal_values_hash_identically() {
    let lhs: Sample<String> = Maybe::from_value(String::from("key"));
    let rhs: Sample<String> = Maybe::from_value(String::from("key"));
    assert_eq!(hash_of(&lhs), hash_of(&rhs));
    assert_eq!(hash_of(&lhs), hash_of(&String::from("key")));
}

#[test]
fn absent_states_hash_by_marker() {
    let null: Sample<String> = Maybe::null();
    let message: Sample<String> = Maybe::from_message("warming up");
    assert_eq!(hash_of(&null), hash_of(&"null"));
    assert_eq!(hash_of(&message), hash_of(&String::from("warming up")));
    assert_eq!(
        hash_of(&Sample::<String>::from_error(SampleError::new("a"))),
        hash_of(&Sample::<String>::from_error(SampleError::new("b"))),
    );
}

#[rstest]
#[case(Maybe::from_value(7), "7")]
#[case(Maybe::null(), "null")]
#[case(Maybe::from_message("pending"), "pending")]
#[case(Maybe::from_error(SampleError::new("boom")), "sample failure: boom")]
fn displays_the_active_payload(#[case] maybe: Sample<u16>, #[case] expected: &str) {
    assert_eq!(maybe.to_string(), expected);
}
