//! Call-site macros: early return, located unwraps and defects

/// Path of the enclosing function, resolved at compile time.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            ::std::option::Option::Some(stripped) => stripped,
            ::std::option::Option::None => name,
        }
    }};
}

/// [`SourceLocation`](crate::SourceLocation) of the invocation, including the enclosing function.
#[macro_export]
macro_rules! location {
    () => {
        $crate::panic::SourceLocation::new(file!(), line!(), $crate::function_name!())
    };
}

/// Raise a [`Defect`](crate::Defect) whose message is the concatenation of `parts`.
///
/// ```should_panic
/// resultkit::defect!("index ", 7, " out of range");
/// ```
#[macro_export]
macro_rules! defect {
    ($($part:expr),+ $(,)?) => {
        $crate::panic::raise($crate::panic::Defect::new(
            $crate::location!(),
            $crate::panic::concat_parts(&[$(&$part as &dyn ::std::fmt::Display),+]),
        ))
    };
}

/// Evaluate a `Result` once, returning early from the enclosing function on `Err`.
///
/// The enclosing function must return a [`Result`](crate::Result) with the
/// same error type; no conversion is applied.
///
/// ```
/// use resultkit::{try_ok, Err, Ok, Result};
///
/// fn half(x: u32) -> Result<u32, &'static str> {
///     if x % 2 == 0 { Ok(x / 2) } else { Err("odd") }
/// }
///
/// fn quarter(x: u32) -> Result<u32, &'static str> {
///     let h = try_ok!(half(x));
///     half(h)
/// }
///
/// assert_eq!(quarter(12).unwrap(), 3);
/// assert_eq!(quarter(6).unwrap_err(), "odd");
/// ```
#[macro_export]
macro_rules! try_ok {
    ($result:expr $(,)?) => {
        match $result {
            $crate::Result::Ok(value) => value,
            $crate::Result::Err(error) => return $crate::Result::Err(error),
        }
    };
}

/// Like [`Result::unwrap`](crate::Result::unwrap), but the diagnostic names the enclosing function.
#[macro_export]
macro_rules! unwrap {
    ($result:expr $(,)?) => {
        $crate::Result::unwrap_at($result, $crate::location!())
    };
}

/// Like [`Result::unwrap_err`](crate::Result::unwrap_err), but the diagnostic names the enclosing function.
#[macro_export]
macro_rules! unwrap_err {
    ($result:expr $(,)?) => {
        $crate::Result::unwrap_err_at($result, $crate::location!())
    };
}
