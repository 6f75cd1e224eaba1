//! One blocking obstacle segment.

use mega_core::Point;

/// A static obstacle line segment on the walkable floor.
///
/// The bounding box and the line coefficients are cached at load time; a
/// bar is immutable afterwards and only ever read by intersection tests.
/// Along the bar the relation `y*dx == x*dy + co` holds, i.e.
/// `co = y1*dx - x1*dy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bar {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,

    // Cached bounding box.
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,

    /// Direction vector `(x2 - x1, y2 - y1)`.
    pub dx: i32,
    pub dy: i32,

    /// Line constant: `y*dx - x*dy == co` for every point on the bar.
    /// Stored widened so intersection math never overflows.
    pub co: i64,
}

impl Bar {
    pub fn new(a: Point, b: Point) -> Bar {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        Bar {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            xmin: a.x.min(b.x),
            ymin: a.y.min(b.y),
            xmax: a.x.max(b.x),
            ymax: a.y.max(b.y),
            dx,
            dy,
            co: a.y as i64 * dx as i64 - a.x as i64 * dy as i64,
        }
    }
}
