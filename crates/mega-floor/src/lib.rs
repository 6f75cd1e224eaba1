//! `mega-floor` — static per-floor obstacle data and visibility tests.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`bar`]        | `Bar` — one blocking line segment with cached line form |
//! | [`grid`]       | `FloorGrid` (bars + waypoints + R-tree), builder, blob parser |
//! | [`visibility`] | straight-line visibility and target-on-line tests      |
//! | [`error`]      | `FloorError`, `FloorResult<T>`                         |
//!
//! # Visibility model
//!
//! A segment between two points is *visible* when it crosses no bar.  The
//! exact intersection math is the legacy `(dx, dy, co)` line form with a
//! ±1-unit acceptance margin; the R-tree only prefilters which bars are
//! worth testing, so results are identical to a full scan.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.          |

pub mod bar;
pub mod error;
pub mod grid;
pub mod visibility;


pub use bar::Bar;
pub use error::{FloorError, FloorResult};
pub use grid::{FloorGrid, FloorGridBuilder, MAX_BARS, MAX_WAYPOINTS};
pub use visibility::TargetStatus;
