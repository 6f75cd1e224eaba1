//! Level-relaxation search over the waypoint graph.
//!
//! The graph is dense and tiny (a few dozen waypoints), so the search is a
//! level-by-level relaxation rather than a heap-driven Dijkstra: every node
//! whose best distance was set at the previous level tries to improve every
//! node whose best distance is still no better, with the route-shape check
//! (single mode) acting as both the edge-validity oracle and the cost
//! metric.  The search terminates on the first level that improves nothing.
//!
//! Node 0 is always the walker's current position and the last node the
//! requested target; both are appended to the waypoint list per request, so
//! the working node table is owned by the call and reentrancy is free.

use log::debug;

use mega_core::{Direction, Point, WalkData};
use mega_floor::FloorGrid;

use crate::{shape, RouteError, RouteResult};

/// Fixed size of the node table, including the synthetic start and target.
///
/// The floor waypoint cap leaves exactly two slots free, so a grid built
/// through `mega-floor` can fill this table but never overflow it.
pub const MAX_NODES: usize = 256;

/// Fixed cap on the extracted leg chain.
pub const MAX_ROUTE_LEGS: usize = 64;

/// Best-known distance sentinel for a node the search has not reached.
const UNREACHABLE: i32 = i32::MAX;

/// One stop of the winning route: a position plus the two admissible travel
/// directions toward the next stop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteLeg {
    pub pos: Point,
    /// Cardinal ("square") travel direction for this leg.
    pub dir_s: Direction,
    /// Diagonal travel direction for this leg.
    pub dir_d: Direction,
}

struct Node {
    pos:   Point,
    level: u32,
    dist:  i32,
    prev:  Option<usize>,
}

/// Search the waypoint graph for a route from `start` to `target`.
///
/// Returns `Ok(None)` when the target is unreachable (route code 0 at the
/// caller).  A found route always has at least two legs (start and target).
///
/// # Errors
///
/// Capacity violations on the node table or the extracted chain.
pub fn find_legs(
    grid: &FloorGrid,
    walk: &WalkData,
    start: Point,
    target: Point,
) -> RouteResult<Option<Vec<RouteLeg>>> {
    let waypoints = grid.waypoints();
    if waypoints.len() + 2 > MAX_NODES {
        return Err(RouteError::TooManyNodes { got: waypoints.len() + 2, max: MAX_NODES });
    }

    let mut nodes: Vec<Node> = Vec::with_capacity(waypoints.len() + 2);
    nodes.push(Node { pos: start, level: 0, dist: 0, prev: None });
    for &w in waypoints {
        nodes.push(Node { pos: w, level: 0, dist: UNREACHABLE, prev: None });
    }
    nodes.push(Node { pos: target, level: 0, dist: UNREACHABLE, prev: None });
    let target_idx = nodes.len() - 1;

    // Relax level by level until a level changes nothing.
    let mut level = 0u32;
    loop {
        let mut changed = false;
        for i in 0..nodes.len() {
            if nodes[i].level != level || nodes[i].dist == UNREACHABLE {
                continue;
            }
            let (from, base) = (nodes[i].pos, nodes[i].dist);
            for j in 0..nodes.len() {
                if j == i || nodes[j].dist < base {
                    continue;
                }
                let Some(cost) = shape::check_single(grid, walk, from, nodes[j].pos)
                else {
                    continue;
                };
                let d = base.saturating_add(cost);
                if d < nodes[j].dist {
                    nodes[j].dist = d;
                    nodes[j].level = level + 1;
                    nodes[j].prev = Some(i);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
        level += 1;
    }

    if nodes[target_idx].dist == UNREACHABLE {
        debug!("no route {start} -> {target} after {level} levels");
        return Ok(None);
    }
    debug!(
        "route {start} -> {target}: dist {} in {level} levels",
        nodes[target_idx].dist
    );
    extract(walk, &nodes, target_idx).map(Some)
}

/// Walk `prev` indices back from the target, reverse, and annotate each leg
/// with its square/diagonal travel directions.
fn extract(walk: &WalkData, nodes: &[Node], target_idx: usize) -> RouteResult<Vec<RouteLeg>> {
    let mut chain = Vec::new();
    let mut cur = Some(target_idx);
    while let Some(i) = cur {
        chain.push(nodes[i].pos);
        cur = nodes[i].prev;
    }
    chain.reverse();

    if chain.len() > MAX_ROUTE_LEGS {
        return Err(RouteError::TooManyLegs { got: chain.len(), max: MAX_ROUTE_LEGS });
    }

    let mut legs: Vec<RouteLeg> = Vec::with_capacity(chain.len());
    for (k, &pos) in chain.iter().enumerate() {
        let (dir_s, dir_d) = if k + 1 < chain.len() {
            leg_dirs(walk, pos, chain[k + 1])
        } else {
            // Final node travels nowhere; carry the previous leg's facing.
            legs.last()
                .map(|l| (l.dir_s, l.dir_d))
                .unwrap_or((Direction::South, Direction::SouthEast))
        };
        legs.push(RouteLeg { pos, dir_s, dir_d });
    }
    Ok(legs)
}

/// The admissible square/diagonal direction pair for travelling `from → to`.
pub(crate) fn leg_dirs(walk: &WalkData, from: Point, to: Point) -> (Direction, Direction) {
    let d = shape::decompose(walk, from, to);
    (d.dir_s, d.dir_d)
}
