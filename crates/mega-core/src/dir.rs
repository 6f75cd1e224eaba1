//! The 8-way movement compass and turn-cost table.
//!
//! Screen convention: `x` grows to the right, `y` grows **downward**, so
//! `North` is `(0, -1)`.  Directions are numbered clockwise from North;
//! the numeric distance between two directions is the turn angle in 45°
//! units, which is exactly what the smoothing cost table is keyed on.

use std::fmt;

/// Turn cost keyed by angular difference `(to - from) & 7`.
///
/// Symmetric: a 45° turn either way costs 1, a 90° turn 3, a 135° turn 5
/// and an about-face 7.  The steep growth biases smoothing toward routes
/// that keep the character facing roughly the same way.
pub const TURN_COST: [i32; 8] = [0, 1, 3, 5, 7, 5, 3, 1];

/// One of the 8 sprite facings / movement directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North     = 0,
    NorthEast = 1,
    East      = 2,
    SouthEast = 3,
    South     = 4,
    SouthWest = 5,
    West      = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in clockwise order starting at North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Decode a 0–7 compass index.
    #[inline]
    pub fn from_index(i: u8) -> Option<Direction> {
        Direction::ALL.get(i as usize).copied()
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the four 45°-offset directions.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        self.index() & 1 == 1
    }

    /// Unit displacement signs `(dx, dy)`, y-down.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North     => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East      => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South     => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West      => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The diagonal direction matching the signs of a displacement.
    ///
    /// A zero component defaults to the positive (east/south) side, which
    /// only matters for axis-aligned legs where the diagonal is unused.
    #[inline]
    pub fn diagonal_from_signs(dx: i32, dy: i32) -> Direction {
        match (dx < 0, dy < 0) {
            (false, false) => Direction::SouthEast,
            (false, true)  => Direction::NorthEast,
            (true, false)  => Direction::SouthWest,
            (true, true)   => Direction::NorthWest,
        }
    }

    /// Signed shortest rotation from `self` to `to` in 45° units.
    ///
    /// Positive is clockwise.  An exact about-face (±4) is reported as `+4`
    /// so turn ramps break the tie clockwise, matching the legacy turner.
    pub fn turn_to(self, to: Direction) -> i32 {
        let diff = (to.index() as i32 - self.index() as i32).rem_euclid(8);
        if diff > 4 { diff - 8 } else { diff }
    }

    /// Rotate one 45° unit along the shorter way toward `to`.
    #[inline]
    pub fn step_toward(self, to: Direction) -> Direction {
        let turn = self.turn_to(to);
        if turn == 0 {
            self
        } else if turn > 0 {
            Direction::ALL[(self.index() + 1) & 7]
        } else {
            Direction::ALL[(self.index() + 7) & 7]
        }
    }

    /// Turn cost from `self` to `to` through [`TURN_COST`].
    #[inline]
    pub fn turn_cost(self, to: Direction) -> i32 {
        TURN_COST[(to.index().wrapping_sub(self.index())) & 7]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North     => "N",
            Direction::NorthEast => "NE",
            Direction::East      => "E",
            Direction::SouthEast => "SE",
            Direction::South     => "S",
            Direction::SouthWest => "SW",
            Direction::West      => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
