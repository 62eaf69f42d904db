//! Errors raised while constructing a [`Cidr`](super::Cidr).

use std::error::Error;
use std::fmt;

/// Construction failure for a CIDR block.
///
/// Once a `Cidr` exists it is valid, so this is the only error kind in the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    /// Malformed dotted-decimal text.
    Format(String),
    /// Numeric value outside its allowed range.
    Range(String),
}

impl CidrError {
    pub(crate) fn format(msg: impl Into<String>) -> CidrError {
        CidrError::Format(msg.into())
    }

    pub(crate) fn range(msg: impl Into<String>) -> CidrError {
        CidrError::Range(msg.into())
    }
}

impl fmt::Display for CidrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CidrError::Format(msg) => write!(f, "format error: {msg}"),
            CidrError::Range(msg) => write!(f, "range error: {msg}"),
        }
    }
}

impl Error for CidrError {}
