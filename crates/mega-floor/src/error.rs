//! Floor-subsystem error type.

use mega_core::MegaError;
use thiserror::Error;

/// Errors produced by `mega-floor`.
#[derive(Debug, Error)]
pub enum FloorError {
    #[error("bar count {got} exceeds fixed capacity {max}")]
    TooManyBars { got: usize, max: usize },

    #[error("waypoint count {got} exceeds fixed capacity {max}")]
    TooManyWaypoints { got: usize, max: usize },

    #[error("floor blob: {0}")]
    Blob(#[from] MegaError),
}

pub type FloorResult<T> = Result<T, FloorError>;
