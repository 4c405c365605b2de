//! Errors of the sample fallible functions

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoError {
    #[error("division by 0")]
    DivisionByZero,

    #[error("Division overflow: {0} / -1")]
    Overflow(i64),

    #[error("Unknown version: {0}")]
    UnknownVersion(u8),
}
