//! Route-subsystem error type.
//!
//! An unreachable target is *not* an error (the search reports it through
//! its return value); only capacity violations surface here.

use thiserror::Error;

/// Errors produced by `mega-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node table size {got} exceeds fixed capacity {max}")]
    TooManyNodes { got: usize, max: usize },

    #[error("route leg count {got} exceeds fixed capacity {max}")]
    TooManyLegs { got: usize, max: usize },

    #[error("smooth path entry count {got} exceeds fixed capacity {max}")]
    TooManySmoothEntries { got: usize, max: usize },
}

pub type RouteResult<T> = Result<T, RouteError>;
