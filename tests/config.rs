//! Configuration loading and CLI command smoke tests.

use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use dsa_labs::cli::commands;
use dsa_labs::config::{HuffmanConfig, LabConfig, NmsConfig};
use dsa_labs::graph::{chain_graph, sample_graph, GraphBuilder};
use dsa_labs::types::LabError;

// ==================== Config Tests ====================

#[test]
fn test_defaults() {
    let config = LabConfig::default();
    assert_eq!(config.seed, None);
    assert_eq!(config.complex.sample_size, 15);
    assert_eq!(config.histogram.max_len, 105);
    assert_eq!(config.graph.start, 'A');
    assert_eq!(config.nms.sizes, vec![100, 500, 1000, 2000, 5000]);
    assert!((config.nms.iou_threshold - 0.5).abs() < f32::EPSILON);
    assert_eq!(config.huffman.words.len(), 5);
}

#[test]
fn test_save_and_load() {
    let mut config = LabConfig::default();
    config.seed = Some(1234);
    config.graph.start = 'E';
    config.nms.sizes = vec![10, 20];

    let tmp = NamedTempFile::new().unwrap();
    config.save(tmp.path()).unwrap();
    let loaded = LabConfig::load(tmp.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(
        tmp.path(),
        "seed = 7\n\n[nms]\nrepetitions = 1\n\n[graph]\nstart = \"C\"\n",
    )
    .unwrap();

    let config = LabConfig::load(tmp.path()).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.nms.repetitions, 1);
    assert_eq!(config.nms.insertion_limit, NmsConfig::default().insertion_limit);
    assert_eq!(config.graph.start, 'C');
    assert_eq!(config.complex, LabConfig::default().complex);
}

#[test]
fn test_invalid_file_is_config_error() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "seed = \"not a number\"").unwrap();
    assert!(matches!(
        LabConfig::load(tmp.path()),
        Err(LabError::Config(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(LabConfig::load(&path), Err(LabError::Io(_))));
    assert!(LabConfig::load_or_default(Some(&path)).is_err());
    assert_eq!(
        LabConfig::load_or_default(None).unwrap(),
        LabConfig::default()
    );
}

// ==================== Command Tests ====================

#[test]
fn test_commands_run_in_both_formats() {
    let config = LabConfig::default();
    for json in [false, true] {
        let mut rng = StdRng::seed_from_u64(99);
        commands::cmd_complex(&config.complex, &mut rng, json).unwrap();
        commands::cmd_histogram(&config.histogram, &mut rng, json).unwrap();
        commands::cmd_huffman(&config.huffman, json).unwrap();
        commands::cmd_graph('A', json).unwrap();
        commands::cmd_expr(&[], None::<Cursor<&str>>, json).unwrap();
    }
}

#[test]
fn test_graph_report_contents() {
    let graph = sample_graph().unwrap();
    let report = commands::graph_report("sample", &graph, 'A').unwrap();

    assert_eq!(report.graph, "sample");
    assert_eq!(report.vertices, graph.labels());
    assert_eq!(report.bfs, vec!['A', 'B', 'D', 'G', 'E', 'C', 'H', 'F']);
    assert_eq!(report.dfs[0], 'A');
    let f = report.distances.iter().find(|d| d.vertex == 'F').unwrap();
    assert_eq!(f.distance, Some(10));
    assert_eq!(report.spanning_tree.total_weight, 32);
    assert!(report.biconnected.articulation_points.is_empty());

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["distances"][0]["vertex"], "A");
    assert_eq!(value["distances"][0]["distance"], 0);
}

#[test]
fn test_graph_report_chain_cut_vertices() {
    let report = commands::graph_report("chain", &chain_graph().unwrap(), 'A').unwrap();
    assert_eq!(
        report.biconnected.articulation_points,
        vec!['E', 'G', 'H', 'J', 'K']
    );
    assert!(matches!(
        commands::graph_report("chain", &chain_graph().unwrap(), 'Z'),
        Err(LabError::UnknownVertex('Z'))
    ));
}

#[test]
fn test_graph_report_unreachable_is_null() {
    let graph = GraphBuilder::new()
        .edge('A', 'B', 3)
        .vertex('C')
        .build()
        .unwrap();
    let report = commands::graph_report("split", &graph, 'A').unwrap();
    let c = report.distances.iter().position(|d| d.vertex == 'C').unwrap();
    assert_eq!(report.distances[c].distance, None);
    let value = serde_json::to_value(&report).unwrap();
    assert!(value["distances"][c]["distance"].is_null());
    assert_eq!(report.spanning_tree.edges.len(), 1);
}

#[test]
fn test_parse_sizes_accepts_valid_list() {
    assert_eq!(commands::parse_sizes("100").unwrap(), vec![100]);
    assert_eq!(
        commands::parse_sizes("100, 500 ,1000").unwrap(),
        vec![100, 500, 1000]
    );
}

#[test]
fn test_parse_sizes_rejects_any_bad_entry() {
    for bad in ["100,abc,-5", "100,-5", "abc", "", "100,", "1.5"] {
        assert!(
            matches!(commands::parse_sizes(bad), Err(LabError::InvalidArgument(_))),
            "{:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_cmd_huffman_letterless_file_falls_back() {
    let tmp = NamedTempFile::new().unwrap();
    std::fs::write(tmp.path(), "0123456789 ?!").unwrap();
    let config = HuffmanConfig {
        text_path: Some(tmp.path().to_path_buf()),
        ..HuffmanConfig::default()
    };
    commands::cmd_huffman(&config, true).unwrap();
}

#[test]
fn test_cmd_graph_unknown_start() {
    assert!(matches!(
        commands::cmd_graph('Z', false),
        Err(LabError::UnknownVertex('Z'))
    ));
}

#[test]
fn test_cmd_nms_small_run() {
    let config = NmsConfig {
        sizes: vec![20],
        repetitions: 1,
        ..NmsConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    commands::cmd_nms(&config, &mut rng, false).unwrap();
}

#[test]
fn test_cmd_huffman_missing_file_falls_back() {
    let config = HuffmanConfig {
        text_path: Some("/nonexistent/speech.txt".into()),
        ..HuffmanConfig::default()
    };
    commands::cmd_huffman(&config, false).unwrap();
}
