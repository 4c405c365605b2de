//! Fatal accessors
//!
//! Calling `unwrap` on an `Err` (or `unwrap_err` on an `Ok`) raises a
//! [`Defect`]. Use `unwrap_or`, `unwrap_err_or` or `match_with` where the
//! variant is data dependent.

use std::fmt;

use super::{Err, Ok, Result};
use crate::panic::{raise, Defect, SourceLocation};

impl<T, E: fmt::Debug> Result<T, E> {
    /// Returns the contained [`Ok`] value.
    ///
    /// # Panics
    ///
    /// Panics with `PANIC: [file:line] called unwrap() on an Err value: <error>`
    /// if the result is [`Err`].
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.unwrap_at(SourceLocation::caller())
    }

    /// [`Result::unwrap`] reporting `location` instead of the caller.
    #[track_caller]
    pub fn unwrap_at(self, location: SourceLocation) -> T {
        match self {
            Ok(value) => value,
            Err(error) => raise(Defect::new(
                location,
                format!("called unwrap() on an Err value: {:?}", error),
            )),
        }
    }
}

impl<T: fmt::Debug, E> Result<T, E> {
    /// Returns the contained [`Err`] value.
    ///
    /// # Panics
    ///
    /// Panics with `PANIC: [file:line] called unwrap_err() on an Ok value: <value>`
    /// if the result is [`Ok`].
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        self.unwrap_err_at(SourceLocation::caller())
    }

    /// [`Result::unwrap_err`] reporting `location` instead of the caller.
    #[track_caller]
    pub fn unwrap_err_at(self, location: SourceLocation) -> E {
        match self {
            Ok(value) => raise(Defect::new(
                location,
                format!("called unwrap_err() on an Ok value: {:?}", value),
            )),
            Err(error) => error,
        }
    }
}
