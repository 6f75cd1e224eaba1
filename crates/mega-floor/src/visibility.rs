//! Straight-line visibility between floor points.
//!
//! Three specialised scans: horizontal and vertical queries intersect each
//! candidate bar against a single scanline; the general case intersects the
//! two lines in their `(dx, dy, co)` form and accepts any crossing whose
//! intersection point lies within both segments' bounding boxes with a
//! ±1-unit margin.  Integer division truncates; the margin absorbs the
//! rounding, exactly as the legacy tests did.

use mega_core::Point;

use crate::FloorGrid;

/// Result of probing a single target point against the obstacle set.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetStatus {
    /// The point is clear of every bar line.
    Clear,
    /// The point lies within one unit of a bar — walking here would pin the
    /// character to an obstacle edge.
    OnLine,
}

impl FloorGrid {
    /// `true` when the straight segment `a → b` crosses no bar.
    ///
    /// A degenerate query (`a == b`) is trivially visible.  Symmetric:
    /// `visible(a, b) == visible(b, a)`.
    pub fn visible(&self, a: Point, b: Point) -> bool {
        if a == b {
            true
        } else if a.x == b.x {
            self.vert_clear(a.x, a.y, b.y)
        } else if a.y == b.y {
            self.horiz_clear(a.y, a.x, b.x)
        } else {
            self.line_clear(a, b)
        }
    }

    /// Check whether `p` sits on (within one unit of) any bar.
    pub fn target_status(&self, p: Point) -> TargetStatus {
        for bar in self.candidate_bars(p.x, p.y, p.x, p.y) {
            if p.x < bar.xmin - 1
                || p.x > bar.xmax + 1
                || p.y < bar.ymin - 1
                || p.y > bar.ymax + 1
            {
                continue;
            }
            // Evaluate the line along its longer axis for precision.
            let on_line = if bar.dx.abs() >= bar.dy.abs() {
                if bar.dx == 0 {
                    // Degenerate point bar; the bbox test above said close.
                    true
                } else {
                    let yc = bar.y1
                        + ((bar.dy as i64 * (p.x - bar.x1) as i64) / bar.dx as i64) as i32;
                    (yc - p.y).abs() <= 1
                }
            } else {
                let xc = bar.x1
                    + ((bar.dx as i64 * (p.y - bar.y1) as i64) / bar.dy as i64) as i32;
                (xc - p.x).abs() <= 1
            };
            if on_line {
                return TargetStatus::OnLine;
            }
        }
        TargetStatus::Clear
    }

    // ── Specialised scans ─────────────────────────────────────────────────

    /// Horizontal segment at `y`, spanning `xa..xb` in either order.
    fn horiz_clear(&self, y: i32, xa: i32, xb: i32) -> bool {
        let (xmin, xmax) = (xa.min(xb), xa.max(xb));
        for bar in self.candidate_bars(xmin, y, xmax, y) {
            if bar.ymin > y || bar.ymax < y {
                continue; // bar never reaches this scanline
            }
            if bar.xmin > xmax + 1 || bar.xmax < xmin - 1 {
                continue;
            }
            if bar.dy == 0 {
                // Collinear horizontal bar with x overlap.
                return false;
            }
            let xc =
                bar.x1 + ((bar.dx as i64 * (y - bar.y1) as i64) / bar.dy as i64) as i32;
            if xc >= xmin - 1 && xc <= xmax + 1 {
                return false;
            }
        }
        true
    }

    /// Vertical segment at `x`, spanning `ya..yb` in either order.
    fn vert_clear(&self, x: i32, ya: i32, yb: i32) -> bool {
        let (ymin, ymax) = (ya.min(yb), ya.max(yb));
        for bar in self.candidate_bars(x, ymin, x, ymax) {
            if bar.xmin > x || bar.xmax < x {
                continue;
            }
            if bar.ymin > ymax + 1 || bar.ymax < ymin - 1 {
                continue;
            }
            if bar.dx == 0 {
                return false;
            }
            let yc =
                bar.y1 + ((bar.dy as i64 * (x - bar.x1) as i64) / bar.dx as i64) as i32;
            if yc >= ymin - 1 && yc <= ymax + 1 {
                return false;
            }
        }
        true
    }

    /// General segment: two-line intersection in `(dx, dy, co)` form.
    fn line_clear(&self, a: Point, b: Point) -> bool {
        let (ldx, ldy) = a.delta_to(b);
        let (qxmin, qxmax) = (a.x.min(b.x), a.x.max(b.x));
        let (qymin, qymax) = (a.y.min(b.y), a.y.max(b.y));
        let co = a.y as i64 * ldx as i64 - a.x as i64 * ldy as i64;

        for bar in self.candidate_bars(qxmin, qymin, qxmax, qymax) {
            let denom = ldx as i64 * bar.dy as i64 - ldy as i64 * bar.dx as i64;
            if denom == 0 {
                continue; // parallel lines never cross
            }
            let xc = ((co * bar.dx as i64 - bar.co * ldx as i64) / denom) as i32;
            let yc = ((co * bar.dy as i64 - bar.co * ldy as i64) / denom) as i32;

            let on_query = xc >= qxmin - 1
                && xc <= qxmax + 1
                && yc >= qymin - 1
                && yc <= qymax + 1;
            let on_bar = xc >= bar.xmin - 1
                && xc <= bar.xmax + 1
                && yc >= bar.ymin - 1
                && yc <= bar.ymax + 1;
            if on_query && on_bar {
                return false;
            }
        }
        true
    }
}
