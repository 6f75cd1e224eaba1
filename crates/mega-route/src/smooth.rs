//! Turn-minimizing path smoothing.
//!
//! Converts the waypoint leg chain into a finer sequence of straight
//! directional sub-legs.  Per leg, four composite strategies are scored
//! from six pairwise turn costs (previous facing into square/diagonal, and
//! square/diagonal out against the next leg's two entry directions) and
//! tried cheapest-first; the first one the route-shape check confirms
//! walkable is committed.  The two half-split strategies carry a fixed
//! penalty — they read as zig-zags on screen, so they only win when the
//! plain orderings turn more or are blocked.

use log::debug;

use mega_core::{Direction, Point, WalkData};
use mega_floor::FloorGrid;

use crate::shape::{self, Shape};
use crate::{RouteError, RouteLeg, RouteResult};

/// Fixed cap on the smoothed path.
///
/// A maximal chain of [`MAX_ROUTE_LEGS`](crate::MAX_ROUTE_LEGS) legs smooths
/// to at most three sub-legs per leg plus the final facing entry, so the
/// cap carries headroom over the worst case.
pub const MAX_SMOOTH_ENTRIES: usize = 320;

/// Extra turn-cost units charged to the two half-split strategies.
const SPLIT_PENALTY: i32 = 3;

/// One straight sub-leg of the smoothed path.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothEntry {
    /// Where this sub-leg ends.
    pub pos: Point,
    pub dir: Direction,
    /// Approximate whole steps to cover the sub-leg; 0 marks a facing
    /// change with no movement (only ever the final entry).
    pub steps: i32,
}

/// Smooth a leg chain into directional sub-legs.
///
/// The final entry always carries the caller's requested end facing, or the
/// last travel facing when the caller asked for "any direction".
///
/// # Errors
///
/// `TooManySmoothEntries` when the smoothed path overflows its fixed cap.
pub fn smoothest_path(
    grid: &FloorGrid,
    walk: &WalkData,
    legs: &[RouteLeg],
    start_facing: Direction,
    target_facing: Option<Direction>,
) -> RouteResult<Vec<SmoothEntry>> {
    debug_assert!(legs.len() >= 2, "a route has at least start and target");

    let mut out: Vec<SmoothEntry> = Vec::new();
    let mut facing = start_facing;

    for p in 0..legs.len() - 1 {
        let from = legs[p].pos;
        let to = legs[p + 1].pos;
        if from == to {
            continue;
        }
        let d = shape::decompose(walk, from, to);
        let (in_s, in_d) = (d.dir_s, d.dir_d);

        // Where the next leg wants to be entered, or the requested end
        // facing on the last leg.
        let (next_a, next_b) = if p + 2 < legs.len() {
            (legs[p + 1].dir_s, legs[p + 1].dir_d)
        } else {
            match target_facing {
                Some(f) => (f, f),
                None => (in_s, in_d),
            }
        };

        let in_cost_s = facing.turn_cost(in_s);
        let in_cost_d = facing.turn_cost(in_d);
        let out_from_s = in_s.turn_cost(next_a).min(in_s.turn_cost(next_b));
        let out_from_d = in_d.turn_cost(next_a).min(in_d.turn_cost(next_b));

        let mut options = [
            (in_cost_s + out_from_s + SPLIT_PENALTY, Shape::SquareOnly),
            (in_cost_s + out_from_d, Shape::SquareDiag),
            (in_cost_d + out_from_s, Shape::DiagSquare),
            (in_cost_d + out_from_d + SPLIT_PENALTY, Shape::DiagOnly),
        ];
        // Stable: equal costs keep the declaration order, so the choice is
        // deterministic across runs.
        options.sort_by_key(|&(cost, _)| cost);

        let walkable = shape::check_all(grid, walk, from, to);
        let chosen = options
            .iter()
            .map(|&(_, s)| s)
            .find(|&s| walkable.contains(s))
            .unwrap_or_else(|| {
                // The search validated this leg in single mode, so this only
                // triggers on pathological geometry; keep the cheapest.
                debug!("no walkable shape {from} -> {to}; forcing {:?}", options[0].1);
                options[0].1
            });

        let mut prev = from;
        for (end, dir) in shape::chain(&d, from, to, chosen) {
            if end == prev {
                continue; // degenerate sub-leg, e.g. an axis-aligned leg
            }
            let (sx, sy) = prev.delta_to(end);
            let steps = (sx.abs().max(sy.abs()) / walk.step_len(dir)).max(1);
            push(&mut out, SmoothEntry { pos: end, dir, steps })?;
            facing = dir;
            prev = end;
        }
    }

    // Force the end facing: requested, or carry the travel facing.
    let end_dir = target_facing.unwrap_or(facing);
    let end_pos = legs[legs.len() - 1].pos;
    push(&mut out, SmoothEntry { pos: end_pos, dir: end_dir, steps: 0 })?;

    Ok(out)
}

fn push(out: &mut Vec<SmoothEntry>, entry: SmoothEntry) -> RouteResult<()> {
    if out.len() == MAX_SMOOTH_ENTRIES {
        return Err(RouteError::TooManySmoothEntries {
            got: MAX_SMOOTH_ENTRIES + 1,
            max: MAX_SMOOTH_ENTRIES,
        });
    }
    out.push(entry);
    Ok(())
}
