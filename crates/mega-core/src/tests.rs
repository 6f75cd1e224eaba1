//! Unit tests for mega-core primitives.

#[cfg(test)]
mod fixed {
    use crate::Fix32;

    #[test]
    fn int_roundtrip() {
        assert_eq!(Fix32::from_int(37).to_int(), 37);
        assert_eq!(Fix32::from_int(-5).to_int(), -5);
    }

    #[test]
    fn truncation_floors_toward_negative_infinity() {
        // 2.5 → 2, but -2.5 → -3: arithmetic shift, not round/trunc.
        let half = Fix32::from_raw(1 << 15);
        assert_eq!((Fix32::from_int(2) + half).to_int(), 2);
        assert_eq!((Fix32::from_int(-3) + half).to_int(), -3);
    }

    #[test]
    fn mul_matches_shift_semantics() {
        // 1.5 * 3 = 4.5
        let one_and_half = Fix32::from_raw(3 << 15);
        let p = one_and_half.mul(Fix32::from_int(3));
        assert_eq!(p.raw(), 9 << 15);
        assert_eq!(p.to_int(), 4);
    }

    #[test]
    fn mul_int_and_div_int() {
        let v = Fix32::from_int(10).mul_int(3);
        assert_eq!(v.to_int(), 30);
        assert_eq!(v.div_int(3).to_int(), 10);
    }
}

#[cfg(test)]
mod dir {
    use crate::Direction;

    #[test]
    fn delta_signs() {
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::SouthWest.delta(), (-1, 1));
    }

    #[test]
    fn diagonal_detection() {
        assert!(Direction::NorthEast.is_diagonal());
        assert!(!Direction::East.is_diagonal());
    }

    #[test]
    fn shortest_turns() {
        assert_eq!(Direction::North.turn_to(Direction::East), 2);
        assert_eq!(Direction::North.turn_to(Direction::West), -2);
        // About-face breaks the tie clockwise.
        assert_eq!(Direction::North.turn_to(Direction::South), 4);
    }

    #[test]
    fn step_toward_walks_the_short_way() {
        let mut d = Direction::North;
        let mut hops = 0;
        while d != Direction::West {
            d = d.step_toward(Direction::West);
            hops += 1;
        }
        assert_eq!(hops, 2); // N → NW → W
    }

    #[test]
    fn turn_cost_symmetry() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.turn_cost(b), b.turn_cost(a));
            }
        }
    }
}

#[cfg(test)]
mod blob {
    use crate::{BlobReader, MegaError};

    #[test]
    fn little_endian_reads() {
        let buf = [0x02, 0x00, 0xfe, 0xff, 0x01, 0x00, 0x01, 0x00];
        let mut r = BlobReader::new(&buf);
        assert_eq!(r.read_u16().unwrap(), 2);
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_i32().unwrap(), 0x0001_0001);
        assert_eq!(r.remaining(), 0);
    }

    #[test]
    fn truncated_read_is_an_error() {
        let mut r = BlobReader::new(&[0x01]);
        match r.read_u16() {
            Err(MegaError::Truncated { need: 1, at: 0 }) => {}
            other => panic!("expected truncation, got {other:?}"),
        }
    }
}

#[cfg(test)]
mod walkdata {
    use crate::{Direction, Fix32, MegaError, WalkData};

    /// 2-frame cycle, every direction moves 8 px per frame along its axes.
    fn simple_table() -> WalkData {
        let mut dx = Vec::new();
        let mut dy = Vec::new();
        for dir in Direction::ALL {
            let (sx, sy) = dir.delta();
            for _ in 0..2 {
                dx.push(Fix32::from_int(sx * 8));
                dy.push(Fix32::from_int(sy * 8));
            }
        }
        WalkData::new(2, 1, dx, dy).unwrap()
    }

    #[test]
    fn whole_step_sums_half_cycle() {
        let w = simple_table();
        let (mx, my) = w.whole_step(Direction::East);
        assert_eq!(mx.to_int(), 8);
        assert_eq!(my.to_int(), 0);
        assert_eq!(w.frames_per_step(), 1);
    }

    #[test]
    fn sprite_sheet_regions_do_not_overlap() {
        let w = simple_table();
        let last_walk = w.walk_frame(Direction::NorthWest, 1);
        assert!(w.stand_frame(Direction::North) > last_walk);
        assert!(w.turn_frame(Direction::North) > w.stand_frame(Direction::NorthWest));
    }

    #[test]
    fn zero_step_direction_rejected() {
        let n = 8 * 2;
        let dx = vec![Fix32::ZERO; n];
        let dy = vec![Fix32::ZERO; n];
        assert!(matches!(
            WalkData::new(2, 0, dx, dy),
            Err(MegaError::WalkData(_))
        ));
    }

    #[test]
    fn blob_roundtrip() {
        let w = simple_table();
        let mut blob = Vec::new();
        blob.extend_from_slice(&2u16.to_le_bytes());
        blob.extend_from_slice(&1u16.to_le_bytes());
        for dir in Direction::ALL {
            for f in 0..2 {
                let (dx, dy) = w.frame_step(dir, f);
                blob.extend_from_slice(&dx.raw().to_le_bytes());
                blob.extend_from_slice(&dy.raw().to_le_bytes());
            }
        }
        let parsed = WalkData::from_blob(&blob).unwrap();
        assert_eq!(parsed.walk_frames(), 2);
        assert_eq!(parsed.whole_step(Direction::South), w.whole_step(Direction::South));
    }

    #[test]
    fn truncated_blob_rejected() {
        let mut blob = Vec::new();
        blob.extend_from_slice(&2u16.to_le_bytes());
        blob.extend_from_slice(&0u16.to_le_bytes());
        blob.extend_from_slice(&[0u8; 4]); // far too short
        assert!(WalkData::from_blob(&blob).is_err());
    }
}
