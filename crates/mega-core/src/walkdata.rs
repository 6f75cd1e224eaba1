//! Per-character movement table.
//!
//! Every character carries a table of per-frame step vectors for each of
//! the 8 directions, in 16.16 fixed point.  A full walk cycle is
//! `walk_frames` frames (both feet); one *step* is half a cycle.  The
//! sprite sheet is laid out walk-cycle first, then one stand frame per
//! direction, then one turn frame per direction:
//!
//! ```text
//! frame id = dir * walk_frames + cycle_pos      (walking)
//!          = 8 * walk_frames + dir              (standing)
//!          = 8 * walk_frames + 8 + dir          (turning in place)
//! ```
//!
//! # Blob layout (little-endian)
//!
//! | Field         | Type            | Notes                                |
//! |---------------|-----------------|--------------------------------------|
//! | `walk_frames` | `u16`           | full-cycle frame count, even, ≥ 2    |
//! | `turn_frames` | `u16`           | 0 = character has no turn frames     |
//! | step vectors  | `8 × wf × 2×i32`| 16.16 `(dx, dy)`, direction-major    |

use crate::{Direction, Fix32, BlobReader, MegaError, MegaResult};

/// Hard cap on `walk_frames`, shared by the parser and the validator.
pub const MAX_WALK_FRAMES: usize = 36;

/// A character's movement table: per-direction, per-frame step vectors plus
/// derived whole-step displacements and sprite-sheet region offsets.
///
/// Immutable once built; loaded per route request and read-only during the
/// computation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkData {
    walk_frames: u16,
    turn_frames: u16,
    /// Per-frame x displacement, `8 * walk_frames` entries, direction-major.
    dx: Vec<Fix32>,
    /// Per-frame y displacement, same layout as `dx`.
    dy: Vec<Fix32>,
    /// Whole-step (half-cycle) x displacement per direction.
    mod_x: [Fix32; 8],
    /// Whole-step (half-cycle) y displacement per direction.
    mod_y: [Fix32; 8],
}

impl WalkData {
    /// Build and validate a movement table.
    ///
    /// # Errors
    ///
    /// - `Capacity` if `walk_frames` exceeds [`MAX_WALK_FRAMES`];
    /// - `WalkData` if the cycle length is odd or below 2, the vector
    ///   lengths do not match `8 * walk_frames`, or any direction's
    ///   whole-step displacement is zero along its movement axis (the
    ///   router divides by these).
    pub fn new(
        walk_frames: u16,
        turn_frames: u16,
        dx: Vec<Fix32>,
        dy: Vec<Fix32>,
    ) -> MegaResult<Self> {
        if walk_frames as usize > MAX_WALK_FRAMES {
            return Err(MegaError::Capacity {
                what: "walk frames",
                got:  walk_frames as usize,
                max:  MAX_WALK_FRAMES,
            });
        }
        if walk_frames < 2 || walk_frames % 2 != 0 {
            return Err(MegaError::WalkData(format!(
                "walk cycle must be an even count >= 2, got {walk_frames}"
            )));
        }
        let expect = 8 * walk_frames as usize;
        if dx.len() != expect || dy.len() != expect {
            return Err(MegaError::WalkData(format!(
                "step vector length {} / {} does not match 8 * {walk_frames}",
                dx.len(),
                dy.len()
            )));
        }

        let half = (walk_frames / 2) as usize;
        let mut mod_x = [Fix32::ZERO; 8];
        let mut mod_y = [Fix32::ZERO; 8];
        for dir in Direction::ALL {
            let base = dir.index() * walk_frames as usize;
            for f in 0..half {
                mod_x[dir.index()] += dx[base + f];
                mod_y[dir.index()] += dy[base + f];
            }
            let (sx, sy) = dir.delta();
            if (sx != 0 && mod_x[dir.index()] == Fix32::ZERO)
                || (sy != 0 && mod_y[dir.index()] == Fix32::ZERO)
            {
                return Err(MegaError::WalkData(format!(
                    "direction {dir} has a zero whole-step displacement"
                )));
            }
        }

        Ok(WalkData { walk_frames, turn_frames, dx, dy, mod_x, mod_y })
    }

    /// Parse a movement table from its legacy blob layout.
    pub fn from_blob(blob: &[u8]) -> MegaResult<Self> {
        let mut r = BlobReader::new(blob);
        let walk_frames = r.read_u16()?;
        let turn_frames = r.read_u16()?;
        if walk_frames as usize > MAX_WALK_FRAMES {
            return Err(MegaError::Capacity {
                what: "walk frames",
                got:  walk_frames as usize,
                max:  MAX_WALK_FRAMES,
            });
        }
        let count = 8 * walk_frames as usize;
        let mut dx = Vec::with_capacity(count);
        let mut dy = Vec::with_capacity(count);
        for _ in 0..count {
            dx.push(Fix32::from_raw(r.read_i32()?));
            dy.push(Fix32::from_raw(r.read_i32()?));
        }
        WalkData::new(walk_frames, turn_frames, dx, dy)
    }

    // ── Cycle geometry ────────────────────────────────────────────────────

    /// Frames in a full walk cycle (both feet).
    #[inline]
    pub fn walk_frames(&self) -> u16 {
        self.walk_frames
    }

    /// Turn frames available per direction (0 = stand frames are reused).
    #[inline]
    pub fn turn_frames(&self) -> u16 {
        self.turn_frames
    }

    /// Frames per step (half a cycle).
    #[inline]
    pub fn frames_per_step(&self) -> u16 {
        self.walk_frames / 2
    }

    /// Unscaled step vector for one frame of the cycle.
    #[inline]
    pub fn frame_step(&self, dir: Direction, cycle_pos: u16) -> (Fix32, Fix32) {
        let i = dir.index() * self.walk_frames as usize + cycle_pos as usize;
        (self.dx[i], self.dy[i])
    }

    /// Whole-step (half-cycle) displacement for a direction.
    #[inline]
    pub fn whole_step(&self, dir: Direction) -> (Fix32, Fix32) {
        (self.mod_x[dir.index()], self.mod_y[dir.index()])
    }

    // ── Sprite-sheet regions ──────────────────────────────────────────────

    /// Frame id of one position of the walk cycle.
    #[inline]
    pub fn walk_frame(&self, dir: Direction, cycle_pos: u16) -> u16 {
        dir.index() as u16 * self.walk_frames + cycle_pos
    }

    /// Frame id of the stand frame for a facing.
    #[inline]
    pub fn stand_frame(&self, dir: Direction) -> u16 {
        8 * self.walk_frames + dir.index() as u16
    }

    /// Frame id of the turn-in-place frame for a facing.  Falls back to the
    /// stand frame for characters without turn frames.
    #[inline]
    pub fn turn_frame(&self, dir: Direction) -> u16 {
        if self.turn_frames == 0 {
            self.stand_frame(dir)
        } else {
            8 * self.walk_frames + 8 + dir.index() as u16
        }
    }

    // ── Derived routing ratios ────────────────────────────────────────────

    /// Integer |x| of a diagonal whole step, at least 1.
    ///
    /// Together with [`diag_y`](Self::diag_y) this is the slope threshold
    /// that decides which axis the diagonal component of a leg consumes.
    #[inline]
    pub fn diag_x(&self) -> i32 {
        self.mod_x[Direction::SouthEast.index()].abs().to_int().max(1)
    }

    /// Integer |y| of a diagonal whole step, at least 1.
    #[inline]
    pub fn diag_y(&self) -> i32 {
        self.mod_y[Direction::SouthEast.index()].abs().to_int().max(1)
    }

    /// Integer length of a whole step along `dir`'s dominant axis, ≥ 1.
    pub fn step_len(&self, dir: Direction) -> i32 {
        let (sx, sy) = dir.delta();
        let lx = if sx != 0 { self.mod_x[dir.index()].abs().to_int() } else { 0 };
        let ly = if sy != 0 { self.mod_y[dir.index()].abs().to_int() } else { 0 };
        lx.max(ly).max(1)
    }
}
