//! Error type for fallible operations.
//!
//! Construction cannot fail (beyond allocation, which is not
//! represented as a recoverable error anywhere in `std`). The only
//! caller-triggerable error is passing an inverted range to a
//! three-sided query.

use std::fmt;

/// Errors returned by [`crate::PrioritySearchTree`] query methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PstError<C> {
    /// `xmin > xmax` was passed to a three-sided query.
    InvalidRange { xmin: C, xmax: C },
}

impl<C: fmt::Display> fmt::Display for PstError<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PstError::InvalidRange { xmin, xmax } => {
                write!(f, "invalid range: xmin ({xmin}) > xmax ({xmax})")
            }
        }
    }
}

impl<C: fmt::Debug + fmt::Display> std::error::Error for PstError<C> {}
