//! `mega-route` — abstract route computation over the waypoint graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`search`] | level-relaxation graph search, `RouteLeg`, path extraction   |
//! | [`shape`]  | route-shape check: leg decomposition, the four routings      |
//! | [`smooth`] | turn-minimizing smoothing, `SmoothEntry`                     |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                               |
//!
//! # Pipeline position
//!
//! `mega-route` sits between the floor model and the animator: it consumes
//! a [`FloorGrid`](mega_floor::FloorGrid) plus the requesting character's
//! [`WalkData`](mega_core::WalkData) and produces the smoothed directional
//! path the realization strategies in `mega-anim` walk over.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod search;
pub mod shape;
pub mod smooth;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use search::{find_legs, RouteLeg, MAX_NODES, MAX_ROUTE_LEGS};
pub use shape::{check_all, check_single, Shape, ShapeSet};
pub use smooth::{smoothest_path, SmoothEntry, MAX_SMOOTH_ENTRIES};
