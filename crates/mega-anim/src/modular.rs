//! Realization: smoothed path → modular path.
//!
//! A modular entry is a breakpoint the animator walks to in a straight
//! line.  The two strategies differ only in which smooth-path samples they
//! keep:
//!
//! - **solid** keeps a sample only when the span since the last breakpoint
//!   covers at least one whole step on *both* axes of its direction, so
//!   the animator never needs a partial step.  Folded-away tail spans make
//!   the result undershoot; crossing validation happens later, in the
//!   solid animator.
//! - **slidy** keeps a sample once the span covers a whole step on either
//!   active axis, and always keeps the final sample, so the path reaches
//!   the exact target by construction.

use mega_core::{Direction, Point, WalkData};
use mega_route::SmoothEntry;

/// One breakpoint of the modular path.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModularEntry {
    pub pos: Point,
    pub dir: Direction,
    /// `true` for real movement, `false` for a facing change in place.
    pub advances: bool,
}

/// Integer whole-step thresholds for a direction (0 on inactive axes).
fn thresholds(walk: &WalkData, dir: Direction) -> (i32, i32) {
    let (wx, wy) = walk.whole_step(dir);
    let (sx, sy) = dir.delta();
    (
        if sx != 0 { wx.abs().to_int().max(1) } else { 0 },
        if sy != 0 { wy.abs().to_int().max(1) } else { 0 },
    )
}

/// Whole-step-only realization.  May undershoot the target; never splits a
/// step.
pub fn solid_path(walk: &WalkData, start: Point, smooth: &[SmoothEntry]) -> Vec<ModularEntry> {
    let mut out = Vec::with_capacity(smooth.len() + 1);
    let mut last = start;

    for entry in smooth.iter().filter(|e| e.steps > 0) {
        let (tx, ty) = thresholds(walk, entry.dir);
        let (ax, ay) = last.delta_to(entry.pos);
        // Commit only when the accumulated span is at least one whole step
        // on every active axis; otherwise fold it into the next sample.
        if ax.abs() >= tx && ay.abs() >= ty {
            out.push(ModularEntry { pos: entry.pos, dir: entry.dir, advances: true });
            last = entry.pos;
        }
    }

    if let Some(end) = smooth.last() {
        out.push(ModularEntry { pos: last, dir: end.dir, advances: false });
    }
    out
}

/// Slip-correcting realization.  Always reaches the exact target; spans
/// shorter than a step are left for the animator's slide correction.
pub fn slidy_path(walk: &WalkData, start: Point, smooth: &[SmoothEntry]) -> Vec<ModularEntry> {
    let mut out = Vec::with_capacity(smooth.len() + 1);
    let mut last = start;

    let moving: Vec<&SmoothEntry> = smooth.iter().filter(|e| e.steps > 0).collect();
    for (k, entry) in moving.iter().enumerate() {
        let (tx, ty) = thresholds(walk, entry.dir);
        let (ax, ay) = last.delta_to(entry.pos);
        let covered = (tx > 0 && ax.abs() >= tx) || (ty > 0 && ay.abs() >= ty);
        // The final sample is the target and is always pinned.
        if covered || k + 1 == moving.len() {
            out.push(ModularEntry { pos: entry.pos, dir: entry.dir, advances: true });
            last = entry.pos;
        }
    }

    if let Some(end) = smooth.last() {
        out.push(ModularEntry { pos: last, dir: end.dir, advances: false });
    }
    out
}
