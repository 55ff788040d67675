//! CLI tests: argument resolution and the end-to-end pipeline.

#[cfg(test)]
mod args {
    use clap::Parser;

    use waygraph_connect::EdgeStrategy;

    use crate::{Cli, Command, StrategyKind};

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).expect("argv should parse")
    }

    #[test]
    fn build_defaults_to_knn_k3() {
        let cli = parse(&["waygraph", "build", "-i", "in.geojson", "-o", "out.json"]);
        let Command::Build { strategy, .. } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(
            strategy.resolve(StrategyKind::Knn),
            EdgeStrategy::KNearest { k: 3 }
        );
    }

    #[test]
    fn relink_defaults_to_threshold_150() {
        let cli = parse(&["waygraph", "relink", "-i", "g.json", "-o", "e.json"]);
        let Command::Relink { strategy, .. } = cli.command else {
            panic!("expected relink");
        };
        assert_eq!(
            strategy.resolve(StrategyKind::Threshold),
            EdgeStrategy::Threshold { max_m: 150.0 }
        );
    }

    #[test]
    fn explicit_strategy_overrides_the_default() {
        let cli = parse(&[
            "waygraph", "build", "-i", "a", "-o", "b",
            "--strategy", "threshold", "--threshold-m", "75.5",
        ]);
        let Command::Build { strategy, .. } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(
            strategy.resolve(StrategyKind::Knn),
            EdgeStrategy::Threshold { max_m: 75.5 }
        );
    }

    #[test]
    fn k_is_configurable() {
        let cli = parse(&["waygraph", "build", "-i", "a", "-o", "b", "--k", "5"]);
        let Command::Build { strategy, .. } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(
            strategy.resolve(StrategyKind::Knn),
            EdgeStrategy::KNearest { k: 5 }
        );
    }
}

#[cfg(test)]
mod pipeline {
    use waygraph_connect::EdgeStrategy;
    use waygraph_io::read_graph;

    use crate::{run_build, run_relink};

    const CAMPUS: &str = r#"{
        "features": [
            {"geometry": {"type": "Polygon",
                "coordinates": [[[-1.2540, 51.7534], [-1.2538, 51.7534],
                                 [-1.2538, 51.7536], [-1.2540, 51.7536]]]},
             "properties": {"name": "Main Library"}},
            {"geometry": {"type": "LineString",
                "coordinates": [[-1.2539, 51.7535], [-1.2536, 51.7537]]},
             "properties": {}},
            {"geometry": {"type": "Point", "coordinates": [-1.2537, 51.7538]},
             "properties": {"name": "Fountain"}},
            {"geometry": {"type": "MultiPolygon", "coordinates": []},
             "properties": {"name": "dropped"}}
        ]
    }"#;

    #[test]
    fn build_then_relink() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("campus.geojson");
        let graph_path = dir.path().join("graph.json");
        let edges_path = dir.path().join("edges.json");
        std::fs::write(&input, CAMPUS).unwrap();

        run_build(&input, &graph_path, EdgeStrategy::KNearest { k: 2 }).unwrap();

        let graph = read_graph(&graph_path).unwrap();
        assert_eq!(graph.nodes.len(), 3); // MultiPolygon feature was skipped
        assert_eq!(graph.edges.len(), 6); // 3 nodes × k=2
        assert!(graph.validate().is_ok());
        assert_eq!(graph.nodes[0].name, "Main Library");
        assert_eq!(graph.nodes[1].name, "Path_2");

        // Re-derive edges with the threshold rule; the campus is well inside
        // 150 m, so every unordered pair connects.
        run_relink(&graph_path, &edges_path, EdgeStrategy::Threshold { max_m: 150.0 }).unwrap();

        let text = std::fs::read_to_string(&edges_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["edges"].as_array().unwrap().len(), 3);
        assert!(value.get("nodes").is_none());
    }

    #[test]
    fn build_reports_skips_after_graph_assembly() {
        // Five well-spaced points plus one unusable feature: with k = 3 the
        // graph file must hold all 15 directed edges, and the skip count must
        // survive the hand-off of the node list into the graph file.
        let mut features: Vec<String> = (0..5)
            .map(|i| {
                format!(
                    r#"{{"geometry": {{"type": "Point", "coordinates": [0, {lat}]}},
                        "properties": {{}}}}"#,
                    lat = i as f64 * 0.01
                )
            })
            .collect();
        features.push(r#"{"geometry": {"type": "Blob", "coordinates": [0,0]}, "properties": {}}"#.into());
        let doc = format!(r#"{{ "features": [{}] }}"#, features.join(","));

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("points.geojson");
        let output = dir.path().join("graph.json");
        std::fs::write(&input, doc).unwrap();

        run_build(&input, &output, EdgeStrategy::KNearest { k: 3 }).unwrap();

        let graph = read_graph(&output).unwrap();
        assert_eq!(graph.nodes.len(), 5);
        assert_eq!(graph.edges.len(), 15);

        // Rebuilding from the same input reproduces the file byte-for-byte.
        let first = std::fs::read(&output).unwrap();
        run_build(&input, &output, EdgeStrategy::KNearest { k: 3 }).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), first);
    }

    #[test]
    fn relink_rejects_out_of_range_foreign_nodes() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("foreign.json");
        let output = dir.path().join("edges.json");
        std::fs::write(
            &input,
            r#"{"nodes": [{"id": 1, "name": "n1", "lat": 91.0, "lng": 0.0,
                           "type": "landmark", "accessible": true}],
                "edges": []}"#,
        )
        .unwrap();

        let err = run_relink(&input, &output, EdgeStrategy::Threshold { max_m: 150.0 })
            .unwrap_err();
        assert!(err.to_string().contains("validating"));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_configuration_fails_before_reading_input() {
        let missing = std::path::PathBuf::from("/nonexistent/input.geojson");
        let out = std::path::PathBuf::from("/nonexistent/out.json");
        // The input path does not exist, but configuration is checked first.
        let err = run_build(&missing, &out, EdgeStrategy::KNearest { k: 0 }).unwrap_err();
        assert!(err.to_string().contains("invalid configuration"));
    }
}
