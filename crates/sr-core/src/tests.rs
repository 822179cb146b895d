//! Unit tests for sr-core primitives.

#[cfg(test)]
mod ids {
    use crate::FeatureId;

    #[test]
    fn index_roundtrip() {
        let id = FeatureId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(FeatureId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(FeatureId::INVALID.0, u32::MAX);
        assert_eq!(FeatureId::default(), FeatureId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(FeatureId(7).to_string(), "FeatureId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(55.751, 37.617);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(30.69, -88.04);
        let b = GeoPoint::new(30.71, -88.02);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-9);
    }

    #[test]
    fn xy_layout_is_lon_lat() {
        let p = GeoPoint::new(1.5, 2.5);
        assert_eq!(p.to_xy(), [2.5, 1.5]);
        assert_eq!(GeoPoint::from_xy(p.to_xy()), p);
    }
}

#[cfg(test)]
mod segment {
    use crate::{Direction, FeatureId, RoadPoint, Segment};

    const F: FeatureId = FeatureId(3);

    #[test]
    fn forward_endpoints() {
        let s = Segment::new(F, 2, true);
        assert_eq!(s.road_point(true), RoadPoint::new(F, 3));
        assert_eq!(s.road_point(false), RoadPoint::new(F, 2));
    }

    #[test]
    fn reverse_endpoints() {
        let s = Segment::new(F, 2, false);
        assert_eq!(s.road_point(true), RoadPoint::new(F, 2));
        assert_eq!(s.road_point(false), RoadPoint::new(F, 3));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let s = Segment::new(F, 0, true);
        let r = s.reversed();
        assert_ne!(s, r);
        assert_eq!(s.road_point(true), r.road_point(false));
        assert_eq!(s.road_point(false), r.road_point(true));
        assert_eq!(r.reversed(), s);
    }

    #[test]
    fn direction_attach_point() {
        assert!(Direction::Outgoing.attach_front());
        assert!(!Direction::Ingoing.attach_front());
    }

    #[test]
    fn display() {
        assert_eq!(Segment::new(F, 1, true).to_string(), "FeatureId(3):1+");
        assert_eq!(Segment::new(F, 1, false).to_string(), "FeatureId(3):1-");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, RoutingConfig};

    #[test]
    fn default_is_valid() {
        assert!(RoutingConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speed() {
        let cfg = RoutingConfig { max_speed_kmph: 0.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
        let cfg = RoutingConfig { max_speed_kmph: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_snap_distance() {
        let cfg = RoutingConfig { max_snap_distance_m: Some(-1.0), ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = RoutingConfig { max_snap_distance_m: None, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_threads() {
        let cfg = RoutingConfig { num_threads: Some(0), ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
