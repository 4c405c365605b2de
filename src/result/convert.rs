//! Borrowing views and conversions to `Option` and the standard library

use super::{Err, Ok, Result};

impl<T, E> Result<T, E> {
    /// Borrow the payload without consuming the result.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match *self {
            Ok(ref value) => Ok(value),
            Err(ref error) => Err(error),
        }
    }

    /// Mutably borrow the payload without consuming the result.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match *self {
            Ok(ref mut value) => Ok(value),
            Err(ref mut error) => Err(error),
        }
    }

    /// The value, discarding the error.
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(_) => None,
        }
    }

    /// The error, discarding the value.
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    /// Convert into [`std::result::Result`], e.g. to use `?` with `From` conversion.
    pub fn into_std(self) -> std::result::Result<T, E> {
        match self {
            Ok(value) => std::result::Result::Ok(value),
            Err(error) => std::result::Result::Err(error),
        }
    }
}

impl<T: Clone, E: Clone> Result<&T, &E> {
    /// Owned copy of a borrowed result. Unavailable for payloads that cannot be cloned.
    pub fn cloned(self) -> Result<T, E> {
        match self {
            Ok(value) => Ok(value.clone()),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<T: Copy, E: Copy> Result<&T, &E> {
    pub fn copied(self) -> Result<T, E> {
        match self {
            Ok(value) => Ok(*value),
            Err(error) => Err(*error),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Result<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            std::result::Result::Ok(value) => Ok(value),
            std::result::Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for std::result::Result<T, E> {
    fn from(result: Result<T, E>) -> Self {
        result.into_std()
    }
}
