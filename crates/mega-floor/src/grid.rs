//! Floor grid: bars, waypoints, and the bar R-tree.
//!
//! # Blob layout (little-endian)
//!
//! | Field       | Type                      |
//! |-------------|---------------------------|
//! | `bar_count` | `u16`                     |
//! | `node_count`| `u16`                     |
//! | bars        | `bar_count × 4 × i16`     |
//! | waypoints   | `node_count × 2 × i16`    |
//!
//! Counts above the fixed capacities are an error, never a clamp.

use rstar::{RTree, RTreeObject, AABB};

use mega_core::{BlobReader, Point};

use crate::{Bar, FloorError, FloorResult};

/// Maximum bars per floor.
pub const MAX_BARS: usize = 256;

/// Maximum waypoints per floor.  Two short of the 256-entry node table so
/// the router can append its synthetic start and target nodes.
pub const MAX_WAYPOINTS: usize = 254;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Bar bounding box stored in the R-tree, pointing back into `bars`.
#[derive(Clone)]
struct BarEntry {
    env: AABB<[i32; 2]>,
    idx: usize,
}

impl RTreeObject for BarEntry {
    type Envelope = AABB<[i32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.env
    }
}

// ── FloorGrid ─────────────────────────────────────────────────────────────────

/// Static per-floor routing data: the obstacle set and the waypoint list.
///
/// Loaded once per floor and replaced wholesale on floor change.  Read-only
/// during route computation, so one grid may serve any number of routers.
pub struct FloorGrid {
    bars:      Vec<Bar>,
    waypoints: Vec<Point>,
    index:     RTree<BarEntry>,
}

impl FloorGrid {
    /// A floor with no obstacles and no waypoints.
    pub fn empty() -> Self {
        FloorGridBuilder::new().build().expect("empty grid is under capacity")
    }

    /// Parse a floor grid from its legacy blob layout.
    pub fn from_blob(blob: &[u8]) -> FloorResult<Self> {
        let mut r = BlobReader::new(blob);
        let bar_count = r.read_u16()? as usize;
        let node_count = r.read_u16()? as usize;

        let mut b = FloorGridBuilder::with_capacity(bar_count, node_count);
        for _ in 0..bar_count {
            let x1 = r.read_i16()? as i32;
            let y1 = r.read_i16()? as i32;
            let x2 = r.read_i16()? as i32;
            let y2 = r.read_i16()? as i32;
            b.add_bar(Point::new(x1, y1), Point::new(x2, y2));
        }
        for _ in 0..node_count {
            let x = r.read_i16()? as i32;
            let y = r.read_i16()? as i32;
            b.add_waypoint(Point::new(x, y));
        }
        b.build()
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    /// Bars whose bounding box touches the query box inflated by one unit.
    ///
    /// This is a prefilter only; callers still run the exact intersection
    /// test on every candidate.
    pub(crate) fn candidate_bars(
        &self,
        xmin: i32,
        ymin: i32,
        xmax: i32,
        ymax: i32,
    ) -> impl Iterator<Item = &Bar> {
        let env = AABB::from_corners([xmin - 1, ymin - 1], [xmax + 1, ymax + 1]);
        self.index
            .locate_in_envelope_intersecting(&env)
            .map(move |e| &self.bars[e.idx])
    }
}

// ── FloorGridBuilder ──────────────────────────────────────────────────────────

/// Construct a [`FloorGrid`] incrementally, then call [`build`](Self::build).
///
/// `build()` validates capacities and bulk-loads the bar R-tree.
pub struct FloorGridBuilder {
    bars:      Vec<Bar>,
    waypoints: Vec<Point>,
}

impl FloorGridBuilder {
    pub fn new() -> Self {
        FloorGridBuilder { bars: Vec::new(), waypoints: Vec::new() }
    }

    pub fn with_capacity(bars: usize, waypoints: usize) -> Self {
        FloorGridBuilder {
            bars:      Vec::with_capacity(bars),
            waypoints: Vec::with_capacity(waypoints),
        }
    }

    pub fn add_bar(&mut self, a: Point, b: Point) -> &mut Self {
        self.bars.push(Bar::new(a, b));
        self
    }

    pub fn add_waypoint(&mut self, p: Point) -> &mut Self {
        self.waypoints.push(p);
        self
    }

    /// Consume the builder and produce a [`FloorGrid`].
    ///
    /// # Errors
    ///
    /// `TooManyBars` / `TooManyWaypoints` when a count exceeds its fixed
    /// capacity.
    pub fn build(self) -> FloorResult<FloorGrid> {
        if self.bars.len() > MAX_BARS {
            return Err(FloorError::TooManyBars { got: self.bars.len(), max: MAX_BARS });
        }
        if self.waypoints.len() > MAX_WAYPOINTS {
            return Err(FloorError::TooManyWaypoints {
                got: self.waypoints.len(),
                max: MAX_WAYPOINTS,
            });
        }

        let entries: Vec<BarEntry> = self
            .bars
            .iter()
            .enumerate()
            .map(|(idx, bar)| BarEntry {
                env: AABB::from_corners([bar.xmin, bar.ymin], [bar.xmax, bar.ymax]),
                idx,
            })
            .collect();

        Ok(FloorGrid {
            bars:      self.bars,
            waypoints: self.waypoints,
            index:     RTree::bulk_load(entries),
        })
    }
}

impl Default for FloorGridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
