//! Unit tests for mega-route.
//!
//! All tests use a hand-crafted walk table: east/west steps are 8 px,
//! north/south 4 px, diagonals (6, 3) — the usual pseudo-perspective
//! asymmetry of an 8-direction sprite set.

use mega_core::{Direction, Fix32, Point, WalkData};
use mega_floor::{FloorGrid, FloorGridBuilder};

/// 2-frame cycle (one frame per step) with perspective-asymmetric steps.
fn walk_table() -> WalkData {
    let mut dx = Vec::new();
    let mut dy = Vec::new();
    for dir in Direction::ALL {
        let (sx, sy) = dir.delta();
        let (step_x, step_y) = if dir.is_diagonal() {
            (sx * 6, sy * 3)
        } else {
            (sx * 8, sy * 4)
        };
        for _ in 0..2 {
            dx.push(Fix32::from_int(step_x));
            dy.push(Fix32::from_int(step_y));
        }
    }
    WalkData::new(2, 1, dx, dy).unwrap()
}

/// Vertical wall at x=50 with a detour waypoint below it.
fn wall_with_detour() -> FloorGrid {
    let mut b = FloorGridBuilder::new();
    b.add_bar(Point::new(50, 0), Point::new(50, 100));
    b.add_waypoint(Point::new(50, 120));
    b.build().unwrap()
}

// ── Route-shape check ─────────────────────────────────────────────────────────

#[cfg(test)]
mod shape {
    use super::*;
    use crate::{check_all, check_single, Shape};

    #[test]
    fn open_floor_accepts_every_shape() {
        let g = FloorGrid::empty();
        let w = walk_table();
        let set = check_all(&g, &w, Point::new(0, 0), Point::new(90, 30));
        for s in Shape::ALL {
            assert!(set.contains(s), "{s:?} should be walkable on an open floor");
        }
    }

    #[test]
    fn blocked_leg_fails_single_mode() {
        let mut b = FloorGridBuilder::new();
        b.add_bar(Point::new(50, -1000), Point::new(50, 1000));
        let g = b.build().unwrap();
        let w = walk_table();
        assert!(check_single(&g, &w, Point::new(0, 0), Point::new(100, 0)).is_none());
        assert!(check_all(&g, &w, Point::new(0, 0), Point::new(100, 0)).is_empty());
    }

    #[test]
    fn cost_is_anisotropic() {
        let g = FloorGrid::empty();
        let w = walk_table();
        // Same screen distance, but vertical steps are half as long, so the
        // vertical leg costs about twice the horizontal one.
        let east = check_single(&g, &w, Point::new(0, 0), Point::new(80, 0)).unwrap();
        let south = check_single(&g, &w, Point::new(0, 0), Point::new(0, 80)).unwrap();
        assert!(south > east, "south {south} should exceed east {east}");
    }

    #[test]
    fn degenerate_leg_has_unit_cost() {
        let g = FloorGrid::empty();
        let w = walk_table();
        assert_eq!(check_single(&g, &w, Point::new(5, 5), Point::new(5, 5)), Some(1));
    }
}

// ── Graph search ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::*;
    use crate::find_legs;

    #[test]
    fn direct_route_is_two_legs() {
        let g = FloorGrid::empty();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 0), Point::new(100, 0))
            .unwrap()
            .expect("open floor must route");
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].pos, Point::new(0, 0));
        assert_eq!(legs[1].pos, Point::new(100, 0));
        assert_eq!(legs[0].dir_s, Direction::East);
    }

    #[test]
    fn wall_forces_detour_through_waypoint() {
        let g = wall_with_detour();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 50), Point::new(100, 50))
            .unwrap()
            .expect("detour waypoint offers a route");
        assert_eq!(legs.len(), 3);
        assert_eq!(legs[1].pos, Point::new(50, 120));
    }

    #[test]
    fn unreachable_target_reports_none() {
        let mut b = FloorGridBuilder::new();
        b.add_bar(Point::new(50, -10_000), Point::new(50, 10_000));
        let g = b.build().unwrap();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 0), Point::new(100, 0)).unwrap();
        assert!(legs.is_none());
    }

    #[test]
    fn forced_hop_chain_overflows_leg_cap() {
        use crate::RouteError;

        // Alternating full-height walls with a gap at the top or bottom in
        // turn; the only way forward is through every gap waypoint, one hop
        // at a time.
        let mut b = FloorGridBuilder::new();
        for k in 1..=70 {
            let x = 10 * k;
            if k % 2 == 0 {
                b.add_bar(Point::new(x, -1000), Point::new(x, 900));
                b.add_waypoint(Point::new(x, 950));
            } else {
                b.add_bar(Point::new(x, -900), Point::new(x, 1000));
                b.add_waypoint(Point::new(x, -950));
            }
        }
        let g = b.build().unwrap();
        let w = walk_table();
        let err = find_legs(&g, &w, Point::new(0, -950), Point::new(710, 950))
            .unwrap_err();
        assert!(matches!(err, RouteError::TooManyLegs { .. }));
    }

    #[test]
    fn steep_leg_gets_vertical_square_direction() {
        let g = FloorGrid::empty();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 0), Point::new(10, 90))
            .unwrap()
            .unwrap();
        assert_eq!(legs[0].dir_s, Direction::South);
        assert_eq!(legs[0].dir_d, Direction::SouthEast);
    }
}

// ── Smoothing ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod smooth {
    use super::*;
    use crate::{find_legs, smoothest_path};

    #[test]
    fn straight_east_leg_smooths_to_one_move() {
        let g = FloorGrid::empty();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 0), Point::new(100, 0))
            .unwrap()
            .unwrap();
        let path = smoothest_path(&g, &w, &legs, Direction::South, Some(Direction::South))
            .unwrap();

        // One moving entry plus the final facing entry.
        assert_eq!(path.len(), 2);
        assert_eq!(path[0].pos, Point::new(100, 0));
        assert_eq!(path[0].dir, Direction::East);
        assert_eq!(path[0].steps, 100 / 8);
        assert_eq!(path[1].dir, Direction::South);
        assert_eq!(path[1].steps, 0);
    }

    #[test]
    fn mixed_leg_splits_into_square_and_diagonal() {
        let g = FloorGrid::empty();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 0), Point::new(100, 30))
            .unwrap()
            .unwrap();
        let path = smoothest_path(&g, &w, &legs, Direction::East, None).unwrap();

        // Ends exactly at the target, every entry a real direction.
        assert_eq!(path.last().unwrap().pos, Point::new(100, 30));
        let moving: Vec<_> = path.iter().filter(|e| e.steps > 0).collect();
        assert!((1..=3).contains(&moving.len()));
        // "Any direction" carries the travel facing into the final entry.
        let last_move = moving.last().unwrap().dir;
        assert_eq!(path.last().unwrap().dir, last_move);
    }

    #[test]
    fn smoothing_is_deterministic() {
        let g = wall_with_detour();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 50), Point::new(100, 50))
            .unwrap()
            .unwrap();
        let a = smoothest_path(&g, &w, &legs, Direction::South, Some(Direction::East))
            .unwrap();
        let b = smoothest_path(&g, &w, &legs, Direction::South, Some(Direction::East))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn end_facing_is_forced() {
        let g = FloorGrid::empty();
        let w = walk_table();
        let legs = find_legs(&g, &w, Point::new(0, 0), Point::new(64, 0))
            .unwrap()
            .unwrap();
        let path = smoothest_path(&g, &w, &legs, Direction::North, Some(Direction::West))
            .unwrap();
        assert_eq!(path.last().unwrap().dir, Direction::West);
    }
}
