//! Chaining and transforming contained values

use super::{Err, Ok, Result};

impl<T, E> Result<T, E> {
    /// Calls `f` with the value if the result is [`Ok`], otherwise passes the error through.
    ///
    /// The error type is unchanged; `f` must return a `Result` with the same `E`.
    ///
    /// ```
    /// use resultkit::{Err, Ok, Result};
    ///
    /// fn sqrt(x: f64) -> Result<f64, &'static str> {
    ///     if x < 0.0 { Err("negative") } else { Ok(x.sqrt()) }
    /// }
    ///
    /// assert_eq!(Ok::<f64, &str>(16.0).and_then(sqrt).and_then(sqrt), Ok(2.0));
    /// assert_eq!(Ok::<f64, &str>(-1.0).and_then(sqrt), Err("negative"));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Ok(value) => f(value),
            Err(error) => Err(error),
        }
    }

    /// Calls `f` with the error if the result is [`Err`], otherwise passes the value through.
    ///
    /// The value type is unchanged; `f` must return a `Result` with the same `T`.
    pub fn or_else<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> Result<T, G>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => f(error),
        }
    }

    /// Maps a `Result<T, E>` to `Result<U, E>` by applying `f` to an [`Ok`] value.
    ///
    /// A function returning `()` yields the void-success form `Result<(), E>`.
    pub fn map<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(value) => Ok(f(value)),
            Err(error) => Err(error),
        }
    }

    /// Maps a `Result<T, E>` to `Result<T, G>` by applying `f` to an [`Err`] value.
    pub fn map_err<G, F>(self, f: F) -> Result<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(f(error)),
        }
    }
}

impl<E> Result<(), E> {
    /// [`Result::and_then`] for the void-success form: `f` takes no argument.
    ///
    /// ```
    /// use resultkit::{make_ok, Ok};
    ///
    /// let answer = make_ok::<(), String>(()).and_then_unit(|| Ok(42));
    /// assert_eq!(answer.unwrap(), 42);
    /// ```
    pub fn and_then_unit<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce() -> Result<U, E>,
    {
        self.and_then(|()| f())
    }

    /// [`Result::map`] for the void-success form: `f` takes no argument.
    pub fn map_unit<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce() -> U,
    {
        self.map(|()| f())
    }

    /// [`Result::match_with`] for the void-success form: `on_ok` takes no argument.
    pub fn match_unit<R, OkFn, ErrFn>(self, on_ok: OkFn, on_err: ErrFn) -> R
    where
        OkFn: FnOnce() -> R,
        ErrFn: FnOnce(E) -> R,
    {
        self.match_with(|()| on_ok(), on_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{make_err, make_ok};
    use std::cell::Cell;

    #[test]
    fn test_and_then_short_circuits() {
        let calls = Cell::new(0);
        let result = make_err::<i32, String>("error".to_string()).and_then(|x| {
            calls.set(calls.get() + 1);
            make_ok(x * 2)
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(result, Err("error".to_string()));
    }

    #[test]
    fn test_and_then_changes_value_type() {
        let result = make_ok::<i32, String>(42).and_then(|x| make_ok(x.to_string()));
        assert_eq!(result, Ok("42".to_string()));
    }

    #[test]
    fn test_or_else_recovers_and_retypes_error() {
        let recovered = make_err::<i32, String>("error".to_string()).or_else(|e| make_ok::<i32, usize>(e.len() as i32));
        assert_eq!(recovered, Ok(5));

        let calls = Cell::new(0);
        let untouched = make_ok::<i32, String>(42).or_else(|_| {
            calls.set(calls.get() + 1);
            make_ok::<i32, String>(999)
        });
        assert_eq!(untouched, Ok(42));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_and_map_err() {
        assert_eq!(make_ok::<i32, String>(42).map(|x| x * 2), Ok(84));
        assert_eq!(make_err::<i32, String>("error".into()).map(|x| x * 2), Err("error".to_string()));
        assert_eq!(make_ok::<i32, String>(42).map_err(|e| e.len()), Ok(42));
        assert_eq!(make_err::<i32, String>("error".into()).map_err(|e| e.len()), Err(5));
    }

    #[test]
    fn test_map_to_unit_collapses_to_void() {
        let seen = Cell::new(0);
        let result: Result<(), String> = make_ok::<i32, String>(7).map(|x| seen.set(x));
        assert_eq!(result, Ok(()));
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_unit_combinators() {
        let void_ok = make_ok::<(), String>(());
        let void_err = make_err::<(), String>("boom".to_string());

        assert_eq!(void_ok.clone().and_then_unit(|| make_ok(42)), Ok(42));
        assert_eq!(void_err.clone().and_then_unit(|| make_ok(42)), Err("boom".to_string()));

        assert_eq!(void_ok.clone().map_unit(|| "hello"), Ok("hello"));
        assert_eq!(void_ok.clone().map_unit(|| ()), Ok(()));

        assert_eq!(void_ok.match_unit(|| 1, |_| -1), 1);
        assert_eq!(void_err.match_unit(|| 1, |e| -(e.len() as i32)), -4);
    }
}
