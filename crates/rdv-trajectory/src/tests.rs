//! Unit tests for rdv-trajectory.

#[cfg(test)]
mod helpers {
    use rdv_core::{NodeId, PlanarPoint};
    use rdv_spatial::{StreetNetwork, StreetNetworkBuilder};

    /// A–B–C–D in a line along x, 10 m streets.
    pub fn line() -> (StreetNetwork, [NodeId; 4]) {
        let mut b = StreetNetworkBuilder::new();
        let a = b.add_node(PlanarPoint::new(0.0, 0.0));
        let bb = b.add_node(PlanarPoint::new(10.0, 0.0));
        let c = b.add_node(PlanarPoint::new(20.0, 0.0));
        let d = b.add_node(PlanarPoint::new(30.0, 0.0));
        b.add_street(a, bb, 10.0).unwrap();
        b.add_street(bb, c, 10.0).unwrap();
        b.add_street(c, d, 10.0).unwrap();
        (b.build(), [a, bb, c, d])
    }

    pub fn times(t: &crate::Timeline) -> Vec<(NodeId, f64)> {
        t.iter().map(|e| (e.node, e.time.secs())).collect()
    }
}

// ── Path timer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timer {
    use rdv_core::{NodeId, Timestamp};
    use rdv_spatial::{Path, SpatialError};

    use super::helpers::{line, times};
    use crate::{time_path, TimingError};

    #[test]
    fn forward_walk_at_one_metre_per_second() {
        let (net, [a, b, c, d]) = line();
        let path = Path::new(vec![a, b, c, d]);
        let t = time_path(&net, &path, Timestamp(0.0), 1.0).unwrap();
        assert_eq!(times(&t), vec![(a, 0.0), (b, 10.0), (c, 20.0), (d, 30.0)]);
    }

    #[test]
    fn reverse_walk_with_late_start() {
        let (net, [a, b, c, d]) = line();
        let path = Path::new(vec![d, c, b, a]);
        let t = time_path(&net, &path, Timestamp(15.0), 1.0).unwrap();
        assert_eq!(times(&t), vec![(d, 15.0), (c, 25.0), (b, 35.0), (a, 45.0)]);
    }

    #[test]
    fn length_matches_path_and_times_never_decrease() {
        let (net, [a, b, c, d]) = line();
        let path = Path::new(vec![a, b, c, d, c, b]);
        let t = time_path(&net, &path, Timestamp::from_hm(8, 30).unwrap(), 2.5).unwrap();
        assert_eq!(t.len(), path.len());
        assert!(t.is_non_decreasing());
        assert_eq!(t.path(), path);
        assert_eq!(t.departure(), Some(Timestamp::from_hm(8, 30).unwrap()));
        assert!((t.duration_secs() - 50.0 / 2.5).abs() < 1e-9);
    }

    #[test]
    fn single_node_path_stays_at_departure() {
        let (net, [_, b, _, _]) = line();
        let t = time_path(&net, &Path::single(b), Timestamp(120.0), 1.4).unwrap();
        assert_eq!(times(&t), vec![(b, 120.0)]);
        assert_eq!(t.duration_secs(), 0.0);
    }

    #[test]
    fn non_positive_or_non_finite_speed_rejected() {
        let (net, [a, b, _, _]) = line();
        let path = Path::new(vec![a, b]);
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = time_path(&net, &path, Timestamp(0.0), speed).unwrap_err();
            assert!(matches!(err, TimingError::InvalidSpeed(_)), "speed {speed}: {err:?}");
        }
    }

    #[test]
    fn speed_checked_before_empty_path() {
        let (net, _) = line();
        let err = time_path(&net, &Path::default(), Timestamp(0.0), 0.0).unwrap_err();
        assert!(matches!(err, TimingError::InvalidSpeed(_)));
        let err = time_path(&net, &Path::default(), Timestamp(0.0), 1.0).unwrap_err();
        assert_eq!(err, TimingError::EmptyPath);
    }

    #[test]
    fn non_adjacent_hop_is_missing_edge() {
        let (net, [a, _, c, _]) = line();
        let err = time_path(&net, &Path::new(vec![a, c]), Timestamp(0.0), 1.0).unwrap_err();
        assert_eq!(err, TimingError::Spatial(SpatialError::MissingEdge { from: a, to: c }));
    }

    #[test]
    fn unknown_node_surfaces_as_spatial_error() {
        let (net, [a, _, _, _]) = line();
        let ghost = NodeId(99);
        let err = time_path(&net, &Path::new(vec![a, ghost]), Timestamp(0.0), 1.0).unwrap_err();
        assert!(matches!(err, TimingError::Spatial(SpatialError::UnknownNode(n)) if n == ghost));
    }
}

// ── Timeline ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod timeline {
    use rdv_core::{NodeId, Timestamp};
    use crate::Timeline;

    #[test]
    fn empty_timeline_accessors() {
        let t = Timeline::default();
        assert!(t.is_empty());
        assert_eq!(t.departure(), None);
        assert_eq!(t.arrival(), None);
        assert_eq!(t.duration_secs(), 0.0);
        assert!(t.is_non_decreasing());
    }

    #[test]
    fn time_at_returns_first_visit() {
        let t = Timeline::from_entries([
            (NodeId(1), Timestamp(0.0)),
            (NodeId(2), Timestamp(5.0)),
            (NodeId(1), Timestamp(10.0)),
        ]);
        assert_eq!(t.time_at(NodeId(1)), Some(Timestamp(0.0)));
        assert_eq!(t.time_at(NodeId(3)), None);
    }

    #[test]
    fn out_of_order_entries_detected() {
        let t = Timeline::from_entries([(NodeId(0), Timestamp(10.0)), (NodeId(1), Timestamp(5.0))]);
        assert!(!t.is_non_decreasing());
    }
}

// ── Encounter detector ────────────────────────────────────────────────────────

#[cfg(test)]
mod encounter {
    use rdv_core::{NodeId, PlanarPoint, Timestamp};
    use rdv_spatial::Path;

    use super::helpers::line;
    use crate::{
        detect_encounter, detect_encounter_with, time_path, EncounterTolerance, ScanPolicy,
        Timeline,
    };

    fn crossing_walks() -> (rdv_spatial::StreetNetwork, Timeline, Timeline, [NodeId; 4]) {
        let (net, [a, b, c, d]) = line();
        let ta = time_path(&net, &Path::new(vec![a, b, c, d]), Timestamp(0.0), 1.0).unwrap();
        let tb = time_path(&net, &Path::new(vec![d, c, b, a]), Timestamp(15.0), 1.0).unwrap();
        (net, ta, tb, [a, b, c, d])
    }

    #[test]
    fn default_tolerance_is_sixty_seconds_twenty_metres() {
        let tol = EncounterTolerance::default();
        assert_eq!(tol.time_secs, 60.0);
        assert_eq!(tol.distance_m, 20.0);
        assert!(tol.is_valid());
        assert!(!EncounterTolerance::new(-1.0, 5.0).is_valid());
        assert!(!EncounterTolerance::new(5.0, f64::NAN).is_valid());
    }

    #[test]
    fn same_node_five_seconds_apart() {
        let (net, ta, tb, [_, _, c, _]) = crossing_walks();
        let hit = detect_encounter(&ta, &tb, EncounterTolerance::new(5.0, 0.0), &net).unwrap();
        assert_eq!(hit.node, c);
        assert_eq!(hit.time, Timestamp(20.0));
        assert_eq!(hit.other_node, c);
        assert_eq!(hit.other_time, Timestamp(25.0));
        assert_eq!(hit.time_diff_secs, 5.0);
        assert_eq!(hit.distance_m, 0.0);
        assert_eq!((hit.index_a, hit.index_b), (2, 1));
    }

    #[test]
    fn one_second_tolerance_finds_nothing() {
        let (net, ta, tb, _) = crossing_walks();
        assert!(detect_encounter(&ta, &tb, EncounterTolerance::new(1.0, 0.0), &net).is_none());
    }

    #[test]
    fn first_match_follows_scan_order_not_time() {
        // With generous bounds A's very first entry already matches B's first.
        let (net, ta, tb, [a, _, _, d]) = crossing_walks();
        let hit = detect_encounter(&ta, &tb, EncounterTolerance::new(60.0, 30.0), &net).unwrap();
        assert_eq!(hit.node, a);
        assert_eq!(hit.other_node, d);
        assert_eq!(hit.distance_m, 30.0);
    }

    #[test]
    fn earliest_in_time_prefers_smaller_settle_time() {
        // Same-node pairs only (0 m tolerance).  A visits 0 then 1; B visits
        // 1 then 0.  Both pairs match; which one settles first depends on
        // when B comes back to node 0.
        let pos = |n: NodeId| Some(PlanarPoint::new(n.0 as f64 * 100.0, 0.0));
        let ta = Timeline::from_entries([
            (NodeId(0), Timestamp(0.0)),
            (NodeId(1), Timestamp(50.0)),
        ]);
        let tb = Timeline::from_entries([
            (NodeId(1), Timestamp(45.0)),
            (NodeId(0), Timestamp(40.0)),
        ]);
        let tol = EncounterTolerance::new(60.0, 0.0);

        let first = detect_encounter_with(ScanPolicy::FirstMatch, &ta, &tb, tol, &pos).unwrap();
        assert_eq!((first.node, first.time), (NodeId(0), Timestamp(0.0)));
        assert_eq!(first.settled_at(), Timestamp(40.0));

        let earliest =
            detect_encounter_with(ScanPolicy::EarliestInTime, &ta, &tb, tol, &pos).unwrap();
        assert_eq!((earliest.node, earliest.time), (NodeId(0), Timestamp(0.0)));

        // Push B's revisit of node 0 later: now node 1 settles first.
        let tb = Timeline::from_entries([
            (NodeId(1), Timestamp(45.0)),
            (NodeId(0), Timestamp(58.0)),
        ]);
        let first = detect_encounter_with(ScanPolicy::FirstMatch, &ta, &tb, tol, &pos).unwrap();
        assert_eq!(first.node, NodeId(0));
        let earliest =
            detect_encounter_with(ScanPolicy::EarliestInTime, &ta, &tb, tol, &pos).unwrap();
        assert_eq!(earliest.node, NodeId(1));
        assert_eq!(earliest.settled_at(), Timestamp(50.0));
    }

    #[test]
    fn far_apart_walkers_never_meet() {
        let pos = |n: NodeId| Some(PlanarPoint::new(n.0 as f64 * 1_000.0, 0.0));
        let ta = Timeline::from_entries([(NodeId(0), Timestamp(0.0)), (NodeId(1), Timestamp(10.0))]);
        let tb = Timeline::from_entries([(NodeId(2), Timestamp(0.0)), (NodeId(3), Timestamp(10.0))]);
        for policy in [ScanPolicy::FirstMatch, ScanPolicy::EarliestInTime] {
            let hit = detect_encounter_with(policy, &ta, &tb, EncounterTolerance::default(), &pos);
            assert!(hit.is_none());
        }
    }

    #[test]
    fn unresolvable_nodes_never_match() {
        let pos = |n: NodeId| (n.0 != 7).then(|| PlanarPoint::new(0.0, 0.0));
        let ta = Timeline::from_entries([(NodeId(7), Timestamp(0.0))]);
        let tb = Timeline::from_entries([(NodeId(7), Timestamp(0.0))]);
        assert!(detect_encounter(&ta, &tb, EncounterTolerance::default(), &pos).is_none());

        let tb = Timeline::from_entries([(NodeId(7), Timestamp(0.0)), (NodeId(8), Timestamp(1.0))]);
        let ta = Timeline::from_entries([(NodeId(9), Timestamp(0.0))]);
        let hit = detect_encounter(&ta, &tb, EncounterTolerance::default(), &pos).unwrap();
        assert_eq!(hit.other_node, NodeId(8));
    }

    #[test]
    fn empty_timelines_yield_none() {
        let (net, ta, _, _) = crossing_walks();
        let empty = Timeline::default();
        assert!(detect_encounter(&ta, &empty, EncounterTolerance::default(), &net).is_none());
        assert!(detect_encounter(&empty, &ta, EncounterTolerance::default(), &net).is_none());
    }

    #[test]
    fn detection_is_deterministic() {
        let (net, ta, tb, _) = crossing_walks();
        let tol = EncounterTolerance::new(10.0, 10.0);
        let first = detect_encounter(&ta, &tb, tol, &net);
        for _ in 0..10 {
            assert_eq!(detect_encounter(&ta, &tb, tol, &net), first);
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let pos = |n: NodeId| Some(PlanarPoint::new(n.0 as f64 * 20.0, 0.0));
        let ta = Timeline::from_entries([(NodeId(0), Timestamp(0.0))]);
        let tb = Timeline::from_entries([(NodeId(1), Timestamp(60.0))]);
        let hit = detect_encounter(&ta, &tb, EncounterTolerance::default(), &pos).unwrap();
        assert_eq!(hit.distance_m, 20.0);
        assert_eq!(hit.time_diff_secs, 60.0);
    }
}
