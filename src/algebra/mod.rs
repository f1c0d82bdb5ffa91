//! Value-flow primitives shared by the option parser and the configuration layer.
//!
//! The carriers are the standard [`Option`] and [`Result`] sum types. This
//! module adds:
//! - Named combinators for optional values ([`OptionalExt`], [`flatten`], [`present`])
//! - Accessors for fallible outcomes ([`OutcomeExt`])
//! - A kind-tagged error record ([`ErrorRecord`]) used as the `E` of every
//!   fallible public operation in this crate

mod error;
mod optional;
mod outcome;

#[cfg(test)]
mod optional_tests;

pub use error::{BoxError, ErrorRecord};
pub use optional::{Absent, OptionalExt, flatten, none, present, some};
pub use outcome::{OutcomeExt, err, ok};
