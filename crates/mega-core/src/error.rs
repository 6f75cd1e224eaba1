//! Core error type.
//!
//! Sub-crates define their own error enums and either convert `MegaError`
//! via `From` or wrap it as one variant.  Capacity violations are always
//! explicit errors — the legacy data tables clamped silently in release
//! builds, which this reimplementation deliberately does not reproduce.

use thiserror::Error;

/// The base error type for `mega-core` and the blob parsers built on it.
#[derive(Debug, Error)]
pub enum MegaError {
    #[error("blob truncated: needed {need} more bytes at offset {at}")]
    Truncated { need: usize, at: usize },

    #[error("{what} count {got} exceeds fixed capacity {max}")]
    Capacity {
        what: &'static str,
        got:  usize,
        max:  usize,
    },

    #[error("invalid walk data: {0}")]
    WalkData(String),
}

/// Shorthand result type for `mega-core`.
pub type MegaResult<T> = Result<T, MegaError>;
