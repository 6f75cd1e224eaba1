//! `mega-core` — foundational types for the `megawalk` character router.
//!
//! This crate is a dependency of every other `mega-*` crate.  It has no
//! `mega-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`fixed`]    | `Fix32` — 16.16 fixed-point screen arithmetic         |
//! | [`dir`]      | `Direction` (8-way), turn-cost table                  |
//! | [`geo`]      | `Point` — integer screen coordinate                   |
//! | [`ids`]      | `CharId`                                              |
//! | [`blob`]     | `BlobReader` — little-endian legacy blob cursor       |
//! | [`walkdata`] | `WalkData` — per-character movement table             |
//! | [`error`]    | `MegaError`, `MegaResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.      |

pub mod blob;
pub mod dir;
pub mod error;
pub mod fixed;
pub mod geo;
pub mod ids;
pub mod walkdata;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use blob::BlobReader;
pub use dir::{Direction, TURN_COST};
pub use error::{MegaError, MegaResult};
pub use fixed::Fix32;
pub use geo::Point;
pub use ids::CharId;
pub use walkdata::WalkData;
