//! Unit tests for sr-graph.
//!
//! All tests use hand-crafted networks along the equator, where 0.001° of
//! longitude is ≈ 111.2 m.

#[cfg(test)]
mod helpers {
    use sr_core::{FeatureId, GeoPoint, RoadPoint};
    use crate::{CarEstimator, IndexGraph, IndexGraphBuilder};

    pub fn lon(i: u32) -> GeoPoint {
        GeoPoint::new(0.0, 0.001 * i as f64)
    }

    /// A small network:
    ///
    /// ```text
    ///   main (two-way, 36 km/h):   m0 ── m1 ── m2 ── m3 ── m4
    ///                                         │
    ///   side (one-way, 36 km/h):              s0 ──▶ s1 (north of m2)
    /// ```
    ///
    /// `side` starts at `m2` (joint `m2 = s0`) and leads north.
    pub fn t_network() -> (IndexGraph, FeatureId, FeatureId) {
        let mut b = IndexGraphBuilder::new();
        let main = b
            .add_road((0..5).map(lon).collect(), false, 36.0)
            .unwrap();
        let side = b
            .add_road(vec![lon(2), GeoPoint::new(0.001, 0.002)], true, 36.0)
            .unwrap();
        b.add_joint(&[RoadPoint::new(main, 2), RoadPoint::new(side, 0)]);
        (b.build(CarEstimator::new(130.0)).unwrap(), main, side)
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use sr_core::{FeatureId, GeoPoint, RoadPoint};
    use crate::{CarEstimator, GraphError, IndexGraphBuilder};
    use super::helpers::lon;

    #[test]
    fn empty_build() {
        let g = IndexGraphBuilder::new().build(CarEstimator::default()).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.road_count(), 0);
        assert_eq!(g.joint_count(), 0);
    }

    #[test]
    fn rejects_degenerate_road() {
        let mut b = IndexGraphBuilder::new();
        let err = b.add_road(vec![lon(0)], false, 50.0).unwrap_err();
        assert!(matches!(err, GraphError::DegenerateRoad(FeatureId(0))));
        assert_eq!(b.road_count(), 0);
    }

    #[test]
    fn rejects_invalid_speed() {
        let mut b = IndexGraphBuilder::new();
        assert!(matches!(
            b.add_road(vec![lon(0), lon(1)], false, 0.0),
            Err(GraphError::InvalidSpeed { .. })
        ));
        assert!(b.add_road(vec![lon(0), lon(1)], false, f32::NAN).is_err());
    }

    #[test]
    fn rejects_joint_on_missing_feature() {
        let mut b = IndexGraphBuilder::new();
        b.add_road(vec![lon(0), lon(1)], false, 50.0).unwrap();
        b.add_joint(&[RoadPoint::new(FeatureId(5), 0)]);
        assert!(matches!(
            b.build(CarEstimator::default()),
            Err(GraphError::FeatureNotFound(FeatureId(5)))
        ));
    }

    #[test]
    fn rejects_joint_point_out_of_range() {
        let mut b = IndexGraphBuilder::new();
        let f = b.add_road(vec![lon(0), lon(1)], false, 50.0).unwrap();
        b.add_joint(&[RoadPoint::new(f, 2)]);
        assert!(matches!(
            b.build(CarEstimator::default()),
            Err(GraphError::PointOutOfRange { len: 2, .. })
        ));
    }

    #[test]
    fn rejects_point_in_two_joints() {
        let mut b = IndexGraphBuilder::new();
        let f = b.add_road(vec![lon(0), lon(1)], false, 50.0).unwrap();
        let g = b.add_road(vec![lon(1), lon(2)], false, 50.0).unwrap();
        b.add_joint(&[RoadPoint::new(f, 1), RoadPoint::new(g, 0)]);
        b.add_joint(&[RoadPoint::new(g, 0)]);
        assert!(matches!(
            b.build(CarEstimator::default()),
            Err(GraphError::DuplicateJointPoint(_))
        ));
    }

    #[test]
    fn coincident_points_become_joints() {
        let mut b = IndexGraphBuilder::new();
        let f = b.add_road(vec![lon(0), lon(1)], false, 50.0).unwrap();
        let g = b.add_road(vec![lon(1), lon(2)], false, 50.0).unwrap();
        b.add_road(vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(1.0, 1.001)], false, 50.0)
            .unwrap();
        b.join_coincident_points();
        assert_eq!(b.joint_count(), 1);
        assert_eq!(b.point_pos(RoadPoint::new(g, 0)), Some(lon(1)));
        assert_eq!(b.point_pos(RoadPoint::new(g, 9)), None);

        let graph = b.build(CarEstimator::default()).unwrap();
        let members = graph.joint_members(RoadPoint::new(f, 1)).unwrap();
        assert_eq!(members, &[RoadPoint::new(f, 1), RoadPoint::new(g, 0)]);
        assert!(graph.joint_members(RoadPoint::new(f, 0)).is_none());
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use sr_core::{Direction, Segment, SegmentEdge};
    use super::helpers::t_network;

    fn targets(edges: &[SegmentEdge]) -> Vec<Segment> {
        edges.iter().map(|e| e.target).collect()
    }

    #[test]
    fn mid_road_outgoing() {
        let (g, main, _) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        g.edge_list(Segment::new(main, 2, true), Direction::Outgoing, &mut out);
        // Front of (main,2,+) is m3: continue forward or turn back.
        assert_eq!(
            targets(&out),
            vec![Segment::new(main, 3, true), Segment::new(main, 2, false)]
        );
    }

    #[test]
    fn dead_end_only_turns_back() {
        let (g, main, _) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        g.edge_list(Segment::new(main, 3, true), Direction::Outgoing, &mut out);
        assert_eq!(targets(&out), vec![Segment::new(main, 3, false)]);
    }

    #[test]
    fn joint_connects_roads() {
        let (g, main, side) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        // Arriving at m2 heading east.
        g.edge_list(Segment::new(main, 1, true), Direction::Outgoing, &mut out);
        let t = targets(&out);
        assert_eq!(t.len(), 3);
        assert!(t.contains(&Segment::new(main, 2, true)));
        assert!(t.contains(&Segment::new(main, 1, false)));
        assert!(t.contains(&Segment::new(side, 0, true)));
    }

    #[test]
    fn one_way_has_no_reverse_exit() {
        let (g, _, side) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        // Front of (side,0,+) is s1, a one-way dead end.
        g.edge_list(Segment::new(side, 0, true), Direction::Outgoing, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn one_way_ingoing() {
        let (g, main, side) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        // Back of (main,2,+) is m2: predecessors arrive at m2.
        g.edge_list(Segment::new(main, 2, true), Direction::Ingoing, &mut out);
        let t = targets(&out);
        assert!(t.contains(&Segment::new(main, 2, false)));
        assert!(t.contains(&Segment::new(main, 1, true)));
        // The one-way side road only leaves m2, it never arrives there.
        assert!(!t.iter().any(|s| s.feature == side));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn edge_list_appends() {
        let (g, main, _) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        g.edge_list(Segment::new(main, 2, true), Direction::Outgoing, &mut out);
        g.edge_list(Segment::new(main, 2, true), Direction::Outgoing, &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], out[2]);
    }

    #[test]
    fn weights_match_estimator() {
        let (g, main, _) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        g.edge_list(Segment::new(main, 0, true), Direction::Outgoing, &mut out);
        // ≈111.2 m at 10 m/s.
        for e in &out {
            assert!((e.weight - 11.12).abs() < 0.01, "weight {}", e.weight);
        }
    }

    #[test]
    fn same_move_costs_same_both_directions() {
        let (g, main, _) = t_network();
        let a = Segment::new(main, 1, true);
        let b = Segment::new(main, 2, true);

        let mut fwd: Vec<SegmentEdge> = Vec::new();
        g.edge_list(a, Direction::Outgoing, &mut fwd);
        let w_fwd = fwd.iter().find(|e| e.target == b).unwrap().weight;

        let mut bwd: Vec<SegmentEdge> = Vec::new();
        g.edge_list(b, Direction::Ingoing, &mut bwd);
        let w_bwd = bwd.iter().find(|e| e.target == a).unwrap().weight;

        assert_eq!(w_fwd, w_bwd);
    }

    #[test]
    #[should_panic]
    fn invalid_segment_panics() {
        let (g, main, _) = t_network();
        let mut out: Vec<SegmentEdge> = Vec::new();
        g.edge_list(Segment::new(main, 4, true), Direction::Outgoing, &mut out);
    }
}

// ── Snapping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use sr_core::GeoPoint;
    use crate::{CarEstimator, IndexGraphBuilder};
    use super::helpers::t_network;

    #[test]
    fn projects_onto_segment_interior() {
        let (g, main, _) = t_network();
        // Slightly south of the main road, between m3 and m4.
        let p = g.snap(GeoPoint::new(-0.0001, 0.0035), None).unwrap();
        assert_eq!(p.feature, main);
        assert_eq!(p.segment_idx, 3);
        assert!(p.point.lat.abs() < 1e-12);
        assert!((p.point.lon - 0.0035).abs() < 1e-12);
        assert!((p.distance_m - 11.12).abs() < 0.05, "got {}", p.distance_m);
    }

    #[test]
    fn max_distance_rejects_far_points() {
        let (g, _, _) = t_network();
        let far = GeoPoint::new(-0.1, 0.002);
        assert!(g.snap(far, Some(1_000.0)).is_none());
        assert!(g.snap(far, None).is_some());
    }

    #[test]
    fn empty_graph_returns_none() {
        let g = IndexGraphBuilder::new().build(CarEstimator::default()).unwrap();
        assert!(g.snap(GeoPoint::new(0.0, 0.0), None).is_none());
    }
}

// ── Estimator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimator {
    use sr_core::{GeoPoint, Segment};
    use crate::{CarEstimator, EdgeEstimator};
    use super::helpers::{lon, t_network};

    #[test]
    fn heuristic_is_symmetric_and_non_negative() {
        let e = CarEstimator::new(100.0);
        let a = GeoPoint::new(30.69, -88.04);
        let b = GeoPoint::new(30.70, -88.03);
        assert!(e.heuristic(a, b) >= 0.0);
        assert_eq!(e.heuristic(a, a), 0.0);
        assert!((e.heuristic(a, b) - e.heuristic(b, a)).abs() < 1e-9);
    }

    #[test]
    fn heuristic_never_exceeds_segment_weight() {
        let (g, main, _) = t_network();
        let road = g.geometry().road(main);
        let s = Segment::new(main, 0, true);
        let w = g.estimator().segment_weight(s, road);
        let h = g.estimator().heuristic(lon(0), lon(1));
        assert!(h <= w);
    }

    #[test]
    fn fast_roads_are_clamped_to_max_speed() {
        let mut b = crate::IndexGraphBuilder::new();
        let f = b.add_road(vec![lon(0), lon(1)], false, 300.0).unwrap();
        let g = b.build(CarEstimator::new(100.0)).unwrap();
        let w = g.estimator().segment_weight(Segment::new(f, 0, true), g.geometry().road(f));
        let h = g.estimator().heuristic(lon(0), lon(1));
        assert!((w - h).abs() < 1e-9);
    }
}
