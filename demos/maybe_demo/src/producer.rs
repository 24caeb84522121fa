//! The demo's producer and consumer functions.
//!
//! [`describe_number`] returns each kind of container depending on its
//! input, and [`takes_a_string`] stands in for any API that wants a bare
//! value.

use std::io::Write;

use maybe_value::Maybe;

use crate::error::{ArgumentError, Result};

/// The one input the producer has something to say about.
pub const GREAT_NUMBER: i64 = 42;

/// Produces a container for `number`.
///
/// * [`GREAT_NUMBER`] yields a value;
/// * negative inputs yield an [`ArgumentError`] payload; and
/// * anything else yields the null marker.
///
/// # Examples
///
/// ```
/// use maybe_demo::producer::describe_number;
///
/// assert_eq!(describe_number(42), "42 is a great number.");
/// assert!(describe_number(-1).is_error());
/// assert!(describe_number(23).is_null());
/// ```
#[must_use]
pub fn describe_number(number: i64) -> Maybe<String> {
    if number == GREAT_NUMBER {
        format!("{number} is a great number.").into()
    } else if number < 0 {
        Maybe::from_error(ArgumentError { number })
    } else {
        Maybe::null()
    }
}

/// Consumes a bare string.
#[must_use]
pub fn takes_a_string(text: &str) -> String {
    format!("{text} was passed.")
}

/// Writes the state and payload of the container produced for `number`.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn write_produced(out: &mut impl Write, number: i64) -> Result<()> {
    let produced = describe_number(number);
    tracing::debug!(number, state = %produced.state(), "producer returned");
    match &produced {
        Maybe::Value(text) => writeln!(out, "value: {text}")?,
        Maybe::Null => writeln!(out, "null")?,
        Maybe::Message(message) => writeln!(out, "message: {message}")?,
        Maybe::Error(err) => writeln!(out, "error: {err}")?,
    }
    Ok(())
}

/// Coerces the container produced for `number` into [`takes_a_string`] and
/// writes the outcome.
///
/// # Errors
///
/// Returns [`DemoError::Coercion`](crate::error::DemoError::Coercion) when
/// the producer did not return a value, or an output error when writing
/// fails.
pub fn write_coerced(out: &mut impl Write, number: i64) -> Result<()> {
    let text = describe_number(number).into_value()?;
    writeln!(out, "{}", takes_a_string(&text))?;
    Ok(())
}
