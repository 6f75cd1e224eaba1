//! `mega-anim` — path realization and walk-frame synthesis.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`frames`]   | `WalkFrame`, the end-of-route sentinel, frame buffer cap   |
//! | [`profile`]  | `CharProfile` quirk tables, `ProfileRegistry`              |
//! | [`modular`]  | solid and slidy realization of the smoothed path           |
//! | [`animator`] | the shared walk-animator state machine                     |
//! | [`engine`]   | `MegaRouter` — the one public routing entry point          |
//! | [`error`]    | `AnimError`, `AnimResult<T>`                               |
//!
//! # Realization strategies
//!
//! The smoothed path is converted to a modular path (position + direction +
//! moved/turned flag) by one of two strategies.  **Solid** keeps only whole
//! steps and may undershoot; its animation is back-validated against the
//! obstacle set and can be rejected outright.  **Slidy** always succeeds:
//! residual positional error at a leg end is redistributed linearly over
//! the frames of the final step, so the character slides into place rather
//! than snapping.  `MegaRouter` tries solid first and falls back to slidy.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.            |

pub mod animator;
pub mod engine;
pub mod error;
pub mod frames;
pub mod modular;
pub mod profile;


pub use engine::{MegaRouter, RouteRequest, RouteResponse, RouteStatus};
pub use error::{AnimError, AnimResult};
pub use frames::{WalkFrame, END_FRAME, FRAME_CAPACITY};
pub use modular::ModularEntry;
pub use profile::{CharProfile, ProfileRegistry};
