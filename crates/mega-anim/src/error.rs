//! Animation-subsystem error type.
//!
//! Solid-strategy rejection is *not* an error — it is a normal negative
//! result that triggers the slidy fallback inside the engine.

use mega_route::RouteError;
use thiserror::Error;

/// Errors produced by `mega-anim`.
#[derive(Debug, Error)]
pub enum AnimError {
    #[error("walk animation overflows the {max}-frame buffer")]
    FrameOverflow { max: usize },

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type AnimResult<T> = Result<T, AnimError>;
