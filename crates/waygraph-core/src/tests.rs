//! Unit tests for waygraph-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, round_cm};

    #[test]
    fn zero_distance_for_coincident_points() {
        let p = GeoPoint::new(51.752, -1.2577);
        assert!(p.distance_m(p).abs() < 1e-9);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(51.7520, -1.2577);
        let b = GeoPoint::new(51.7548, -1.2540);
        assert_eq!(a.distance_m(b), b.distance_m(a));
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on a 6,371 km sphere.
        let a = GeoPoint::new(51.0, -1.0);
        let b = GeoPoint::new(52.0, -1.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 10.0, "got {d}");
    }

    #[test]
    fn triangle_inequality_real_points() {
        // Three points around a city centre.
        let a = GeoPoint::new(51.7520, -1.2577);
        let b = GeoPoint::new(51.7548, -1.2540);
        let c = GeoPoint::new(51.7500, -1.2500);
        let eps = 1e-6;
        assert!(a.distance_m(c) <= a.distance_m(b) + b.distance_m(c) + eps);
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = a.distance_m(b);
        assert!(d.is_finite());
        // Half the Earth's circumference: π * R.
        assert!((d - std::f64::consts::PI * 6_371_000.0).abs() < 1.0, "got {d}");
    }

    #[test]
    fn bounds_check() {
        assert!(GeoPoint::new(90.0, 180.0).in_bounds());
        assert!(GeoPoint::new(-90.0, -180.0).in_bounds());
        assert!(!GeoPoint::new(90.01, 0.0).in_bounds());
        assert!(!GeoPoint::new(0.0, -180.5).in_bounds());
        assert!(!GeoPoint::new(f64::NAN, 0.0).in_bounds());
    }

    #[test]
    fn rounding_to_centimetres() {
        assert_eq!(round_cm(150.004), 150.0);
        assert_eq!(round_cm(150.005), 150.01);
        assert_eq!(round_cm(0.0), 0.0);
        assert_eq!(round_cm(12.345), 12.35);
    }
}

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn sequential_assignment() {
        assert_eq!(NodeId::FIRST, NodeId(1));
        assert_eq!(NodeId::FIRST.next(), NodeId(2));
    }

    #[test]
    fn ordering_and_display() {
        assert!(NodeId(1) < NodeId(2));
        assert_eq!(NodeId(7).to_string(), "7");
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&NodeId(5)).unwrap();
        assert_eq!(json, "5");
    }
}

#[cfg(test)]
mod model {
    use crate::{Edge, Node, NodeId, NodeKind};

    fn sample_node() -> Node {
        Node {
            id: NodeId(1),
            name: "Main Library".to_string(),
            lat: 51.7534,
            lng: -1.2540,
            kind: NodeKind::Building,
            accessible: true,
        }
    }

    #[test]
    fn kind_labels() {
        assert_eq!(NodeKind::Building.as_str(), "building");
        assert_eq!(NodeKind::Landmark.label(), "Landmark");
        assert_eq!(NodeKind::Path.to_string(), "path");
    }

    #[test]
    fn node_serializes_with_lowercase_type() {
        let json = serde_json::to_value(sample_node()).unwrap();
        assert_eq!(json["type"], "building");
        assert_eq!(json["id"], 1);
        assert_eq!(json["accessible"], true);
    }

    #[test]
    fn node_roundtrip() {
        let node = sample_node();
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn edge_field_names() {
        let e = Edge { from: NodeId(1), to: NodeId(2), distance_m: 42.5 };
        let json = serde_json::to_value(e).unwrap();
        assert_eq!(json["from"], 1);
        assert_eq!(json["to"], 2);
        assert_eq!(json["distance_m"], 42.5);
    }
}
