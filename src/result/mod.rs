//! The `Result` value type
//!
//! A [`Result<T, E>`] holds exactly one of a success value `T` or an error
//! value `E`. Its variant never changes after construction; every combinator
//! consumes the value and produces a new one.
//!
//! Operations come in two forms. Consuming forms take `self` and move the
//! payload out. Non-consuming forms go through [`Result::as_ref`] /
//! [`Result::as_mut`], which borrow the payload, optionally followed by
//! [`Result::cloned`] when an owned copy is needed (only for `Clone` payloads).
//!
//! `Result<(), E>` is the void-success form. It shares every operation above
//! and adds no-argument combinators (`and_then_unit`, `map_unit`, `match_unit`).

mod convert;
mod monadic;
mod unwrap;

use serde::{Deserialize, Serialize};

pub use self::Result::{Err, Ok};

/// Either a success value (`Ok`) or an error value (`Err`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
    /// Success value
    Ok(T),
    /// Error value
    Err(E),
}

/// Build an `Ok`, naming both type parameters at the call site.
///
/// ```
/// let r = resultkit::make_ok::<u8, String>(7);
/// assert!(r.is_ok());
/// ```
pub fn make_ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Build an `Err`, naming both type parameters at the call site.
pub fn make_err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

impl<T, E> Result<T, E> {
    /////////////////////////////////////////////////////////////////////////
    // Observers
    /////////////////////////////////////////////////////////////////////////

    /// Returns `true` if the result is [`Ok`].
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(*self, Ok(_))
    }

    /// Returns `true` if the result is [`Err`].
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is [`Ok`] and the value matches `f`.
    ///
    /// `f` is not called on an [`Err`].
    pub fn is_ok_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Ok(value) => f(value),
            Err(_) => false,
        }
    }

    /// Returns `true` if the result is [`Err`] and the error matches `f`.
    ///
    /// `f` is not called on an [`Ok`].
    pub fn is_err_and<F>(&self, f: F) -> bool
    where
        F: FnOnce(&E) -> bool,
    {
        match self {
            Ok(_) => false,
            Err(error) => f(error),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Consuming the value
    /////////////////////////////////////////////////////////////////////////

    /// Calls `on_ok` with the value or `on_err` with the error, exactly once.
    ///
    /// Both arms must produce the same type, which may be `()`.
    ///
    /// ```
    /// use resultkit::make_err;
    ///
    /// let code = make_err::<u32, &str>("404 Not Found").match_with(|v| v, |_| 0);
    /// assert_eq!(code, 0);
    /// ```
    pub fn match_with<R, OkFn, ErrFn>(self, on_ok: OkFn, on_err: ErrFn) -> R
    where
        OkFn: FnOnce(T) -> R,
        ErrFn: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    /// Returns the value, or `default` if the result is [`Err`].
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(_) => default,
        }
    }

    /// Returns the error, or `default` if the result is [`Ok`].
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Ok(_) => default,
            Err(error) => error,
        }
    }
}
