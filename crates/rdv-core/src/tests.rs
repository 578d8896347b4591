//! Unit tests for rdv-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::default(), EdgeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{BBox, PlanarPoint};

    #[test]
    fn euclidean_distance() {
        let a = PlanarPoint::new(0.0, 0.0);
        let b = PlanarPoint::new(3.0, 4.0);
        assert_eq!(a.distance_m(b), 5.0);
        assert_eq!(b.distance_m(a), 5.0);
        assert_eq!(a.distance_m(a), 0.0);
    }

    #[test]
    fn bbox_corners_are_normalised() {
        let b = BBox::from_corners(PlanarPoint::new(10.0, -5.0), PlanarPoint::new(-10.0, 5.0));
        assert_eq!(b.min, PlanarPoint::new(-10.0, -5.0));
        assert_eq!(b.max, PlanarPoint::new(10.0, 5.0));
        assert_eq!(b.center(), PlanarPoint::new(0.0, 0.0));
    }

    #[test]
    fn bbox_contains_is_inclusive() {
        let b = BBox::from_corners(PlanarPoint::new(0.0, 0.0), PlanarPoint::new(10.0, 10.0));
        assert!(b.contains(PlanarPoint::new(0.0, 10.0)));
        assert!(b.contains(PlanarPoint::new(5.0, 5.0)));
        assert!(!b.contains(PlanarPoint::new(10.01, 5.0)));
    }

    #[test]
    fn enclosing_box() {
        assert!(BBox::enclosing(&[]).is_none());
        let pts = [
            PlanarPoint::new(1.0, 2.0),
            PlanarPoint::new(-3.0, 7.0),
            PlanarPoint::new(4.0, -1.0),
        ];
        let b = BBox::enclosing(&pts).unwrap();
        assert_eq!(b.min, PlanarPoint::new(-3.0, -1.0));
        assert_eq!(b.max, PlanarPoint::new(4.0, 7.0));
    }
}

#[cfg(test)]
mod time {
    use crate::Timestamp;

    #[test]
    fn from_hm() {
        assert_eq!(Timestamp::from_hm(9, 5).unwrap(), Timestamp(32_700.0));
        assert_eq!(Timestamp::from_hm(0, 0).unwrap(), Timestamp::MIDNIGHT);
        assert!(Timestamp::from_hm(24, 0).is_err());
        assert!(Timestamp::from_hm(9, 60).is_err());
    }

    #[test]
    fn parse_hm() {
        assert_eq!(Timestamp::parse_hm("09:00").unwrap(), Timestamp(32_400.0));
        assert_eq!(Timestamp::parse_hm(" 23:59 ").unwrap(), Timestamp(86_340.0));
        assert!(Timestamp::parse_hm("0900").is_err());
        assert!(Timestamp::parse_hm("aa:00").is_err());
    }

    #[test]
    fn arithmetic() {
        let t = Timestamp(100.0);
        assert_eq!(t + 20.5, Timestamp(120.5));
        assert_eq!(t.plus_secs(1.0), Timestamp(101.0));
        assert_eq!(Timestamp(130.0) - t, 30.0);
        assert_eq!(t.secs_since(Timestamp(130.0)), -30.0);
        assert_eq!(t.abs_diff_secs(Timestamp(130.0)), 30.0);
    }

    #[test]
    fn display_past_midnight() {
        assert_eq!(Timestamp(32_700.0).to_string(), "09:05:00");
        assert_eq!(Timestamp(90_061.9).to_string(), "25:01:01");
    }
}

#[cfg(test)]
mod pace {
    use crate::{Walker, WalkingPace};

    #[test]
    fn preset_speeds() {
        assert!((WalkingPace::Stroll.speed_mps() - 0.2778).abs() < 1e-4);
        assert!((WalkingPace::Normal.speed_mps() - 0.6944).abs() < 1e-4);
        assert!((WalkingPace::Brisk.speed_mps() - 0.9167).abs() < 1e-4);
        assert_eq!(WalkingPace::Custom(1.4).speed_mps(), 1.4);
        assert_eq!(WalkingPace::default(), WalkingPace::Normal);
    }

    #[test]
    fn parse() {
        assert_eq!(WalkingPace::parse("brisk").unwrap(), WalkingPace::Brisk);
        assert_eq!(WalkingPace::parse("1.25").unwrap(), WalkingPace::Custom(1.25));
        assert!(WalkingPace::parse("jog").is_err());
    }

    #[test]
    fn walker_labels() {
        assert_eq!(Walker::A.to_string(), "A");
        assert_eq!(Walker::BOTH, [Walker::A, Walker::B]);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let items: Vec<u32> = (0..1_000_000).collect();
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.choose(&items), r2.choose(&items));
            assert_eq!(r1.sample_distinct(&items, 3), r2.sample_distinct(&items, 3));
        }
    }

    #[test]
    fn per_run_streams_are_reproducible_and_distinct() {
        let items: Vec<u32> = (0..1_000).collect();
        let a1 = SimRng::for_run(7, 3).sample_distinct(&items, 4).unwrap();
        let a2 = SimRng::for_run(7, 3).sample_distinct(&items, 4).unwrap();
        let b = SimRng::for_run(7, 4).sample_distinct(&items, 4).unwrap();
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
    }

    #[test]
    fn sample_distinct_positions() {
        let mut rng = SimRng::new(0);
        let items = [10, 20, 30];
        for _ in 0..100 {
            let picked = rng.sample_distinct(&items, 2).unwrap();
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
        }
        assert!(rng.sample_distinct(&items, 4).is_none());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}
