//! The demonstration scenarios, one check per documented behaviour.
//!
//! Each scenario reports success on its own line so the binary's output
//! reads as a checklist of the container's contract.

use std::io::{self, Write};

use maybe_value::{Maybe, MaybeError, State};

use crate::error::{ArgumentError, DemoError, Result};
use crate::producer::{describe_number, takes_a_string};

/// A named check over the container's behaviour.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    description: &'static str,
    check: fn() -> Result<()>,
}

impl Scenario {
    /// Human-readable statement of the behaviour being checked.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Runs the check.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Check`] when the behaviour differs from the
    /// description.
    pub fn verify(&self) -> Result<()> {
        (self.check)()
    }
}

/// Every scenario, in presentation order.
pub const SCENARIOS: [Scenario; 7] = [
    Scenario {
        description: "a maybe compares equal to its value in both directions",
        check: compares_with_value,
    },
    Scenario {
        description: "a maybe can be built from a bare value",
        check: builds_from_value,
    },
    Scenario {
        description: "a maybe can be passed where a string is expected",
        check: passes_as_string,
    },
    Scenario {
        description: "a maybe without a value refuses coercion",
        check: refuses_coercion,
    },
    Scenario {
        description: "a producer can return a bare value",
        check: produces_value,
    },
    Scenario {
        description: "a producer can return an error",
        check: produces_error,
    },
    Scenario {
        description: "a producer can return the null marker",
        check: produces_null,
    },
];

/// Runs every scenario, writing `ok: <description>` after each success.
///
/// Stops at the first failing scenario.
///
/// # Errors
///
/// Returns the failing scenario's [`DemoError`], or an output error when
/// writing fails.
pub fn run(out: &mut impl Write) -> Result<()> {
    for scenario in &SCENARIOS {
        scenario.verify()?;
        tracing::info!(scenario = scenario.description, "scenario passed");
        writeln!(out, "ok: {}", scenario.description)?;
    }
    out.flush().map_err(DemoError::from)
}

const fn ensure(condition: bool, failure: &'static str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(DemoError::Check(failure))
    }
}

fn compares_with_value() -> Result<()> {
    let maybe: Maybe<i32> = Maybe::from_value(3);
    ensure(maybe == 3, "maybe == 3 should hold")?;
    ensure(3 == maybe, "3 == maybe should hold")
}

fn builds_from_value() -> Result<()> {
    let maybe: Maybe<i32> = 99.into();
    ensure(maybe == 99, "a converted 99 should equal 99")
}

fn passes_as_string() -> Result<()> {
    let maybe: Maybe<String> = Maybe::from_value(String::from("A piece of text"));
    let passed = takes_a_string(&maybe.into_value()?);
    ensure(
        passed == "A piece of text was passed.",
        "the coerced string should reach the consumer",
    )
}

fn refuses_coercion() -> Result<()> {
    let maybe: Maybe<String> = Maybe::from_error(io::Error::other("It all went wrong!!! :("));
    match maybe.into_value().map(|text| takes_a_string(&text)) {
        Err(MaybeError::InvalidCoercion {
            state: State::Error,
        }) => Ok(()),
        _ => Err(DemoError::Check(
            "coercing an error container should fail with an invalid coercion",
        )),
    }
}

fn produces_value() -> Result<()> {
    ensure(
        describe_number(42) == "42 is a great number.",
        "42 should produce its description",
    )
}

fn produces_error() -> Result<()> {
    let produced = describe_number(-1);
    ensure(
        produced
            .error()
            .is_some_and(|err| err.is::<ArgumentError>()),
        "a negative number should produce an argument error",
    )
}

fn produces_null() -> Result<()> {
    ensure(describe_number(23).is_null(), "23 should produce the null marker")
}
