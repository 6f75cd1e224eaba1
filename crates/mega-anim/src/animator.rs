//! The shared walk-animator state machine.
//!
//! Both realization strategies drive the same machine:
//!
//! ```text
//! Start → Initial Turn → per leg { Walk → Leg-End Correction → Turn
//! Stitching } → Final Turn → Terminal
//! ```
//!
//! The only strategy-dependent point is leg-end correction: **solid**
//! rewinds the overshooting step and leaves the leg short, **slidy**
//! redistributes the residual linearly over the frames of the step just
//! emitted so the character slides into place.
//!
//! Positions accumulate in 16.16 fixed point; each frame's step vector is
//! scaled by `scale_a * y + scale_b` (pseudo-perspective foreshortening)
//! and positions are truncated to screen integers only when a frame record
//! is produced.

use mega_core::{Direction, Fix32, Point, WalkData};
use mega_floor::{FloorGrid, TargetStatus};

use crate::profile::CharProfile;
use crate::{AnimError, AnimResult, ModularEntry, WalkFrame, END_FRAME, FRAME_CAPACITY};

/// Leg-end correction mode.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum LegEnd {
    /// Discard the overshooting step and close the leg short (solid).
    Rewind,
    /// Slide the last step's frames onto the target (slidy).
    Slide,
}

/// Request-scoped animation inputs shared by both strategies.
pub struct AnimParams<'a> {
    pub walk:    &'a WalkData,
    pub profile: &'a CharProfile,
    /// Place-scale coefficients: `scale = scale_a * y + scale_b`.
    pub scale_a: Fix32,
    pub scale_b: Fix32,
}

struct Animator<'a> {
    walk:    &'a WalkData,
    profile: &'a CharProfile,
    scale_a: Fix32,
    scale_b: Fix32,

    frames: Vec<WalkFrame>,
    x: Fix32,
    y: Fix32,
    /// Position within the walk cycle; carries left/right step parity
    /// across legs.
    cycle: u16,
    dir: Direction,
    /// Frame range of the last fully emitted walking step, the target of
    /// turn stitching and slide correction.
    last_step: Option<(usize, usize)>,
}

impl<'a> Animator<'a> {
    fn new(params: &AnimParams<'a>, start: Point, facing: Direction) -> Self {
        Animator {
            walk:      params.walk,
            profile:   params.profile,
            scale_a:   params.scale_a,
            scale_b:   params.scale_b,
            frames:    Vec::new(),
            x:         Fix32::from_int(start.x),
            y:         Fix32::from_int(start.y),
            cycle:     0,
            dir:       facing,
            last_step: None,
        }
    }

    // ── Frame emission ────────────────────────────────────────────────────

    fn push(&mut self, frame: WalkFrame) -> AnimResult<()> {
        if self.frames.len() == FRAME_CAPACITY {
            return Err(AnimError::FrameOverflow { max: FRAME_CAPACITY });
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Emit an arbitrary frame id at the current position and facing.
    fn push_raw(&mut self, frame: u16) -> AnimResult<()> {
        self.push(WalkFrame {
            frame,
            dir:  self.dir,
            step: 0,
            x:    self.x.to_int(),
            y:    self.y.to_int(),
        })
    }

    fn stand(&mut self) -> AnimResult<()> {
        self.push_raw(self.walk.stand_frame(self.dir))
    }

    fn burst(&mut self, ids: &[u16]) -> AnimResult<()> {
        for &id in ids {
            self.push_raw(id)?;
        }
        Ok(())
    }

    // ── Turning ───────────────────────────────────────────────────────────

    /// Turn in place one 45° unit at a time, emitting a turn frame per unit.
    fn turn_ramp(&mut self, to: Direction) -> AnimResult<()> {
        while self.dir != to {
            self.dir = self.dir.step_toward(to);
            self.push_raw(self.walk.turn_frame(self.dir))?;
        }
        self.last_step = None;
        Ok(())
    }

    /// Shift the last step's frames into the character's walking-turn
    /// variants, when it has any.
    fn stitch_turn(&mut self, turn: i32) {
        let offset = if turn < 0 {
            self.profile.walking_turn_left
        } else {
            self.profile.walking_turn_right
        };
        if let (Some(off), Some((a, b))) = (offset, self.last_step) {
            for f in &mut self.frames[a..b] {
                f.frame += off;
            }
        }
    }

    // ── Walking ───────────────────────────────────────────────────────────

    fn walk_leg(&mut self, target: Point, dir: Direction, end: LegEnd) -> AnimResult<()> {
        if dir != self.dir {
            let turn = self.dir.turn_to(dir);
            if turn.abs() <= 2 {
                // ±45°/±90° between legs: stitch, then snap the facing.
                self.stitch_turn(turn);
                self.dir = dir;
            } else {
                self.turn_ramp(dir)?;
            }
        }

        let (sx, sy) = dir.delta();
        let fps = self.walk.frames_per_step();
        let mut step_fix: Vec<(Fix32, Fix32)> = Vec::with_capacity(fps as usize);
        let mut emitted_this_leg = false;

        loop {
            // Leg complete once an active axis has no remaining travel.
            let rem_x = target.x - self.x.to_int();
            let rem_y = target.y - self.y.to_int();
            if (sx != 0 && rem_x * sx <= 0) || (sy != 0 && rem_y * sy <= 0) {
                break;
            }

            // Emit one whole step.
            let mark = self.frames.len();
            let saved = (self.x, self.y, self.cycle);
            step_fix.clear();
            for _ in 0..fps {
                let (dx, dy) = self.walk.frame_step(dir, self.cycle);
                let scale = self.scale_a.mul_int(self.y.to_int()) + self.scale_b;
                self.x += dx.mul(scale);
                self.y += dy.mul(scale);
                step_fix.push((self.x, self.y));
                let frame = self.walk.walk_frame(dir, self.cycle);
                let record = WalkFrame {
                    frame,
                    dir,
                    step: self.cycle,
                    x: self.x.to_int(),
                    y: self.y.to_int(),
                };
                self.push(record)?;
                self.cycle = (self.cycle + 1) % self.walk.walk_frames();
            }
            self.last_step = Some((mark, self.frames.len()));
            emitted_this_leg = true;

            // Overshoot: the step carried us past the target.
            let over_x = sx != 0 && (target.x - self.x.to_int()) * sx < 0;
            let over_y = sy != 0 && (target.y - self.y.to_int()) * sy < 0;
            if over_x || over_y {
                match end {
                    LegEnd::Rewind => {
                        self.frames.truncate(mark);
                        (self.x, self.y, self.cycle) = saved;
                        self.last_step = None;
                    }
                    LegEnd::Slide => self.slide_into(target, mark, &step_fix),
                }
                break;
            }
        }

        if end == LegEnd::Slide && (self.x.to_int(), self.y.to_int()) != (target.x, target.y)
        {
            if emitted_this_leg {
                if let Some((mark, _)) = self.last_step {
                    // Undershot within a step: slide the last step onto the
                    // target.
                    self.slide_into(target, mark, &step_fix);
                    return Ok(());
                }
            }
            // Nothing emitted for this leg (span shorter than one step):
            // pin the position so the next leg starts from the breakpoint.
            self.x = Fix32::from_int(target.x);
            self.y = Fix32::from_int(target.y);
        }
        Ok(())
    }

    /// Redistribute the residual error linearly over the frames of the
    /// step beginning at `mark`, then pin the position to `target`.
    fn slide_into(&mut self, target: Point, mark: usize, step_fix: &[(Fix32, Fix32)]) {
        let n = step_fix.len() as i32;
        if n > 0 {
            let err_x = Fix32::from_int(target.x) - self.x;
            let err_y = Fix32::from_int(target.y) - self.y;
            for (k, &(fx, fy)) in step_fix.iter().enumerate() {
                let share = k as i32 + 1;
                let f = &mut self.frames[mark + k];
                f.x = (fx + err_x.mul_int(share).div_int(n)).to_int();
                f.y = (fy + err_y.mul_int(share).div_int(n)).to_int();
            }
        }
        self.x = Fix32::from_int(target.x);
        self.y = Fix32::from_int(target.y);
    }

    // ── Terminal ──────────────────────────────────────────────────────────

    fn finish(mut self) -> AnimResult<Vec<WalkFrame>> {
        for _ in 0..3 {
            self.push_raw(END_FRAME)?;
        }
        Ok(self.frames)
    }
}

// ── Drivers ───────────────────────────────────────────────────────────────────

fn animate(
    params: &AnimParams<'_>,
    start: Point,
    facing: Direction,
    path: &[ModularEntry],
    end: LegEnd,
) -> AnimResult<Vec<WalkFrame>> {
    let mut a = Animator::new(params, start, facing);
    a.stand()?;

    // The trailing in-place entry carries the resolved end facing.
    let end_dir = path.last().map(|e| e.dir);
    let first_dir = path
        .iter()
        .find(|e| e.advances)
        .map(|e| e.dir)
        .or(end_dir)
        .unwrap_or(facing);

    if first_dir != a.dir {
        if let Some(f) = a.profile.head_turn_frame {
            a.push_raw(f)?;
        }
        a.turn_ramp(first_dir)?;
    }
    if let Some(burst) = a.profile.slow_in.get(&first_dir) {
        let ids = burst.clone();
        a.burst(&ids)?;
    }

    for e in path.iter().filter(|e| e.advances) {
        a.walk_leg(e.pos, e.dir, end)?;
    }

    if let Some(ed) = end_dir {
        if ed != a.dir {
            a.turn_ramp(ed)?;
        }
        if let Some(burst) = a.profile.slow_out.get(&ed) {
            let ids = burst.clone();
            a.burst(&ids)?;
        }
    }
    a.stand()?;
    a.finish()
}

/// Animate a solid modular path.
///
/// Back-validation first: every realized leg is re-checked with the
/// elementary visibility test and the final position with the
/// target-on-line check.  Whole-step shortcuts can cut corners the
/// smoothing approximations missed, and this is where that shows up.
/// After animation the walked endpoint must still sit on `target` within
/// one unit — whole-step rewinding can leave the character short by most
/// of a step, which reads as a broken walk on screen.
/// Returns `Ok(None)` on rejection — the caller falls back to slidy.
pub fn animate_solid(
    grid: &FloorGrid,
    params: &AnimParams<'_>,
    start: Point,
    facing: Direction,
    path: &[ModularEntry],
    target: Point,
) -> AnimResult<Option<Vec<WalkFrame>>> {
    let mut prev = start;
    for e in path.iter().filter(|e| e.advances) {
        if !grid.visible(prev, e.pos) {
            return Ok(None);
        }
        prev = e.pos;
    }
    if grid.target_status(prev) == TargetStatus::OnLine {
        return Ok(None);
    }

    let frames = animate(params, start, facing, path, LegEnd::Rewind)?;
    match frames.iter().rev().find(|f| !f.is_end()) {
        Some(last) if (last.x - target.x).abs() <= 1 && (last.y - target.y).abs() <= 1 => {
            Ok(Some(frames))
        }
        _ => Ok(None),
    }
}

/// Animate a slidy modular path.  Never rejects.
pub fn animate_slidy(
    params: &AnimParams<'_>,
    start: Point,
    facing: Direction,
    path: &[ModularEntry],
) -> AnimResult<Vec<WalkFrame>> {
    animate(params, start, facing, path, LegEnd::Slide)
}

/// Turn-in-place script for a zero-length route.
pub fn turn_on_spot(
    params: &AnimParams<'_>,
    start: Point,
    facing: Direction,
    target_facing: Option<Direction>,
) -> AnimResult<Vec<WalkFrame>> {
    let mut a = Animator::new(params, start, facing);
    a.stand()?;
    if let Some(to) = target_facing {
        if to != a.dir {
            if let Some(f) = a.profile.head_turn_frame {
                a.push_raw(f)?;
            }
            a.turn_ramp(to)?;
            a.stand()?;
        }
    }
    a.finish()
}
