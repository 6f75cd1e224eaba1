//! `MegaRouter` — the public routing entry point.
//!
//! One call runs the whole pipeline: target probe → graph search →
//! smoothing → realization → animation.  All working buffers are owned by
//! the call, so a single router instance may serve any number of
//! characters and floors without reentrancy hazards.

use log::debug;

use mega_core::{CharId, Direction, Fix32, Point, WalkData};
use mega_floor::{FloorGrid, TargetStatus};
use mega_route::{find_legs, smoothest_path};

use crate::animator::{self, AnimParams};
use crate::profile::ProfileRegistry;
use crate::{modular, AnimResult, WalkFrame};

/// Everything one route request needs beyond the floor and walk tables.
#[derive(Clone, Debug)]
pub struct RouteRequest {
    pub char_id: CharId,
    pub start: Point,
    pub start_facing: Direction,
    /// Place-scale coefficients: `scale = scale_a * y + scale_b`.
    pub scale_a: Fix32,
    pub scale_b: Fix32,
    pub target: Point,
    /// `None` requests "any direction": the walk facing is kept at the end.
    pub target_facing: Option<Direction>,
}

/// Public route outcome codes, matching the legacy numbering.
///
/// The legacy internal code 3 ("target sits on an obstacle line") is
/// folded into `NoRoute` before it reaches a caller.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RouteStatus {
    /// Off-floor, blocked, or pinned-to-obstacle target.
    NoRoute = 0,
    /// A normal multi-leg walking route.
    Route = 1,
    /// Zero-length route: turn on the spot.
    TurnOnly = 2,
}

/// The routing result handed to the animation consumer.
#[derive(Clone, Debug)]
pub struct RouteResponse {
    pub status: RouteStatus,
    /// Sentinel-terminated frame script; empty when `status` is `NoRoute`.
    pub frames: Vec<WalkFrame>,
}

/// The walk router.  Holds only the character profile registry; per-floor
/// and per-character tables are passed into each call.
#[derive(Default)]
pub struct MegaRouter {
    profiles: ProfileRegistry,
}

impl MegaRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: ProfileRegistry) -> Self {
        MegaRouter { profiles }
    }

    /// Compute a walking route and its animation script.
    ///
    /// Returns a status plus frames; unreachable or rejected targets are a
    /// `NoRoute` *status*, not an error.  Errors are reserved for capacity
    /// violations in the route or frame buffers.
    pub fn route(
        &self,
        grid: &FloorGrid,
        walk: &WalkData,
        req: &RouteRequest,
    ) -> AnimResult<RouteResponse> {
        let params = AnimParams {
            walk,
            profile: self.profiles.get(req.char_id),
            scale_a: req.scale_a,
            scale_b: req.scale_b,
        };

        // Targets pinned to an obstacle line are rejected before searching.
        if grid.target_status(req.target) == TargetStatus::OnLine {
            debug!("{}: target {} is on an obstacle line", req.char_id, req.target);
            return Ok(RouteResponse { status: RouteStatus::NoRoute, frames: Vec::new() });
        }

        // Zero-length route: turn on the spot.
        if req.start == req.target {
            let frames = animator::turn_on_spot(
                &params,
                req.start,
                req.start_facing,
                req.target_facing,
            )?;
            return Ok(RouteResponse { status: RouteStatus::TurnOnly, frames });
        }

        let Some(legs) = find_legs(grid, walk, req.start, req.target)? else {
            return Ok(RouteResponse { status: RouteStatus::NoRoute, frames: Vec::new() });
        };
        let smooth =
            smoothest_path(grid, walk, &legs, req.start_facing, req.target_facing)?;

        // Solid first; it fails cleanly when its whole-step shortcuts cross
        // a bar or fall short of the target, and slidy always succeeds.
        let solid = modular::solid_path(walk, req.start, &smooth);
        if let Some(frames) = animator::animate_solid(
            grid,
            &params,
            req.start,
            req.start_facing,
            &solid,
            req.target,
        )? {
            return Ok(RouteResponse { status: RouteStatus::Route, frames });
        }
        debug!("{}: solid realization rejected, using slidy", req.char_id);

        let slidy = modular::slidy_path(walk, req.start, &smooth);
        let frames =
            animator::animate_slidy(&params, req.start, req.start_facing, &slidy)?;
        Ok(RouteResponse { status: RouteStatus::Route, frames })
    }
}
