//! A four-state result container.
//!
//! [`Maybe<T, E>`] holds exactly one of a value of type `T`, an explicit
//! null marker, an informational message, or an error payload of type `E`.
//! It lets callers tell "no value because absence is expected" apart from
//! "no value because something failed" while still handing out a bare `T`
//! when one is present.
//!
//! Rust has no truthiness overload for user types, so the boolean-context
//! contract is expressed through [`Maybe::has_value`], which call sites use
//! explicitly:
//!
//! ```
//! use maybe_value::Maybe;
//!
//! let answer: Maybe<u32> = Maybe::from_value(42);
//! if answer.has_value() {
//!     assert_eq!(answer, 42);
//! }
//! ```
//!
//! Extracting a bare `T` from a container that holds anything else fails
//! with [`MaybeError::InvalidCoercion`]:
//!
//! ```
//! use maybe_value::{Maybe, MaybeError, State};
//!
//! let missing: Maybe<String> = Maybe::null();
//! assert_eq!(
//!     missing.into_value(),
//!     Err(MaybeError::InvalidCoercion { state: State::Null })
//! );
//! ```

mod error;
mod maybe;
mod maybe_ext;
mod state;

pub use error::{MaybeError, MaybeResult};
pub use maybe::{BoxError, Maybe};
pub use maybe_ext::{MaybeOptionExt, MaybeResultExt};
pub use state::State;
