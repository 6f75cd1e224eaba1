//! Route-shape check: multi-mode visibility between two floor points.
//!
//! A leg is decomposed into a **diagonal** component and a residual
//! **square** component.  Which axis the diagonal consumes depends on the
//! leg's slope relative to the character's diagonal step ratio: shallower
//! legs spend all their y travelling diagonally and make up the rest going
//! east/west; steeper legs do the opposite.
//!
//! Four concrete routings between the points are then built from elementary
//! visibility tests:
//!
//! | Shape        | Sub-legs                              | Enters / exits on |
//! |--------------|---------------------------------------|-------------------|
//! | `SquareOnly` | ½ square · diagonal · ½ square        | square / square   |
//! | `SquareDiag` | square · diagonal                     | square / diagonal |
//! | `DiagSquare` | diagonal · square                     | diagonal / square |
//! | `DiagOnly`   | ½ diagonal · square · ½ diagonal      | diagonal / diagonal |
//!
//! Enumerate-all mode ([`check_all`]) reports which routings are walkable;
//! single mode ([`check_single`]) reports pass/fail plus the anisotropic
//! step-cost estimate the graph search relaxes on.

use mega_core::{Direction, Point, WalkData};
use mega_floor::FloorGrid;

/// One of the four concrete two-/three-segment routings of a leg.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    SquareOnly,
    SquareDiag,
    DiagSquare,
    DiagOnly,
}

impl Shape {
    /// Cheapest-first probing order for single mode.
    pub const ALL: [Shape; 4] =
        [Shape::SquareDiag, Shape::DiagSquare, Shape::SquareOnly, Shape::DiagOnly];

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Shape::SquareOnly => 1,
            Shape::SquareDiag => 2,
            Shape::DiagSquare => 4,
            Shape::DiagOnly   => 8,
        }
    }
}

/// Bitmask of walkable shapes, as returned by enumerate-all mode.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeSet(u8);

impl ShapeSet {
    #[inline]
    pub fn contains(self, s: Shape) -> bool {
        self.0 & s.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn insert(&mut self, s: Shape) {
        self.0 |= s.bit();
    }
}

// ── Decomposition ─────────────────────────────────────────────────────────────

/// A leg split into its diagonal component and square residual, plus the
/// admissible travel directions.
pub(crate) struct Decomp {
    /// Diagonal component `(dx, dy)`.
    pub diag: (i32, i32),
    /// Square residual; exactly one axis is non-zero (or both are zero).
    pub square: (i32, i32),
    /// Cardinal direction of the square residual.
    pub dir_s: Direction,
    /// Diagonal direction of the quadrant.
    pub dir_d: Direction,
}

pub(crate) fn decompose(walk: &WalkData, from: Point, to: Point) -> Decomp {
    let (ldx, ldy) = from.delta_to(to);
    let dgx = walk.diag_x();
    let dgy = walk.diag_y();
    let dir_d = Direction::diagonal_from_signs(ldx, ldy);

    if ldx.abs() as i64 * dgy as i64 >= ldy.abs() as i64 * dgx as i64 {
        // Shallow leg: the diagonal consumes all of y.
        let ddx = ldx.signum() * (ldy.abs() * dgx) / dgy;
        let dir_s = if ldx >= 0 { Direction::East } else { Direction::West };
        Decomp { diag: (ddx, ldy), square: (ldx - ddx, 0), dir_s, dir_d }
    } else {
        // Steep leg: the diagonal consumes all of x.
        let ddy = ldy.signum() * (ldx.abs() * dgy) / dgx;
        let dir_s = if ldy >= 0 { Direction::South } else { Direction::North };
        Decomp { diag: (ldx, ddy), square: (0, ldy - ddy), dir_s, dir_d }
    }
}

/// Sub-leg chain for one shape: `(endpoint, direction)` per sub-leg, in
/// order, the last endpoint always `to`.  Zero-length sub-legs are kept;
/// callers skip them when committing.
pub(crate) fn chain(
    d: &Decomp,
    from: Point,
    to: Point,
    shape: Shape,
) -> Vec<(Point, Direction)> {
    match shape {
        Shape::SquareDiag => {
            vec![(from.offset(d.square.0, d.square.1), d.dir_s), (to, d.dir_d)]
        }
        Shape::DiagSquare => {
            vec![(from.offset(d.diag.0, d.diag.1), d.dir_d), (to, d.dir_s)]
        }
        Shape::SquareOnly => {
            let m1 = from.offset(d.square.0 / 2, d.square.1 / 2);
            let m2 = m1.offset(d.diag.0, d.diag.1);
            vec![(m1, d.dir_s), (m2, d.dir_d), (to, d.dir_s)]
        }
        Shape::DiagOnly => {
            let m1 = from.offset(d.diag.0 / 2, d.diag.1 / 2);
            let m2 = m1.offset(d.square.0, d.square.1);
            vec![(m1, d.dir_d), (m2, d.dir_s), (to, d.dir_d)]
        }
    }
}

fn walkable(grid: &FloorGrid, d: &Decomp, from: Point, to: Point, shape: Shape) -> bool {
    let mut prev = from;
    for (end, _) in chain(d, from, to, shape) {
        if !grid.visible(prev, end) {
            return false;
        }
        prev = end;
    }
    true
}

// ── Anisotropic step cost ─────────────────────────────────────────────────────

/// Estimated walking effort of a leg, in 1/256ths of a whole step.
///
/// Square travel is measured against the whole-step length of its cardinal
/// (east/west steps are visually longer than north/south ones), diagonal
/// travel against the diagonal step's per-axis consumption.  Always ≥ 1 so
/// relaxed distances strictly increase.
fn step_cost(walk: &WalkData, d: &Decomp) -> i32 {
    let sq_len = d.square.0.abs() + d.square.1.abs();
    let sq = ((sq_len as i64) << 8) / walk.step_len(d.dir_s) as i64;
    let dg = (((d.diag.0.abs() as i64) << 8) / walk.diag_x() as i64)
        .max(((d.diag.1.abs() as i64) << 8) / walk.diag_y() as i64);
    ((sq + dg) as i32).max(1)
}

// ── Public modes ──────────────────────────────────────────────────────────────

/// Enumerate-all mode: which of the four routings are walkable.
pub fn check_all(grid: &FloorGrid, walk: &WalkData, from: Point, to: Point) -> ShapeSet {
    let d = decompose(walk, from, to);
    let mut set = ShapeSet::default();
    for shape in Shape::ALL {
        if walkable(grid, &d, from, to, shape) {
            set.insert(shape);
        }
    }
    set
}

/// Single mode: `Some(cost)` when at least one routing is walkable.
pub fn check_single(
    grid: &FloorGrid,
    walk: &WalkData,
    from: Point,
    to: Point,
) -> Option<i32> {
    let d = decompose(walk, from, to);
    for shape in Shape::ALL {
        if walkable(grid, &d, from, to, shape) {
            return Some(step_cost(walk, &d));
        }
    }
    None
}
