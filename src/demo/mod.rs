//! Sample fallible functions
//!
//! Small call sites showing how `Result` pipelines read in practice. The
//! binary runs them and the benchmark harness reuses `divide`.

pub mod error;

pub use error::DemoError;

use tracing::debug;

use crate::{try_ok, Err, Ok, Result};

/// Header format version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Version {
    V1 = 1,
    V2 = 2,
}

/// Integer division that reports a zero divisor instead of panicking.
pub fn divide(a: i64, b: i64) -> Result<i64, DemoError> {
    match a.checked_div(b) {
        Some(quotient) => Ok(quotient),
        None if b == 0 => Err(DemoError::DivisionByZero),
        None => Err(DemoError::Overflow(a)),
    }
}

/// Read the format version from the first header byte.
pub fn parse_version(header: &[u8; 6]) -> Result<Version, DemoError> {
    match header[0] {
        1 => Ok(Version::V1),
        2 => Ok(Version::V2),
        other => Err(DemoError::UnknownVersion(other)),
    }
}

/// Version byte plus the next two header bytes, wrapping on overflow.
pub fn parse_data(header: &[u8; 6]) -> Result<u8, DemoError> {
    let version = try_ok!(parse_version(header));
    Ok((version as u8).wrapping_add(header[1]).wrapping_add(header[2]))
}

/// `a / b`, then a division by zero that is recovered to `0`, then `/ 1`.
pub fn division_chain(a: i64, b: i64) -> Result<i64, DemoError> {
    divide(a, b)
        .and_then(|quotient| {
            debug!(quotient, "first division");
            divide(quotient, 0)
        })
        .or_else(|error| {
            debug!(%error, "recovering from failed division");
            Ok(0)
        })
        .and_then(|quotient| divide(quotient, 1))
}
