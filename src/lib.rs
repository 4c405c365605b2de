//! ResultKit - a value-or-error type with chainable combinators
//!
//! [`Result<T, E>`] holds either a success value or an error value and offers
//! `map`, `and_then`, `or_else`, `map_err` and `match_with` for composing
//! fallible steps. [`try_ok!`] propagates an error out of the enclosing
//! function. Calling `unwrap` on the wrong variant is a programmer error and
//! raises a [`Defect`] panic carrying the call site.

#[macro_use]
mod macros;

pub mod bench;
pub mod config;
pub mod demo;
pub mod panic;
pub mod result;

// Re-export commonly used types
pub use panic::{Defect, SourceLocation};
pub use result::{make_err, make_ok, Err, Ok, Result};
