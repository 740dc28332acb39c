use std::io::Write;

use tempfile::NamedTempFile;
use prereq_graph::config::{load_and_validate, load_or_default};
use prereq_graph::errors::PrereqGraphError;
use prereq_graph::layout::LayoutOptions;
use prereq_graph_test_utils::builders::ConfigFileBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_full_config_is_parsed() {
    let file = write_config(
        r#"
[layout]
max_depth = 4
sweeps = 2
node_gap_x = 120.0
layer_gap_y = 90.5
node_size = 12.0

[data]
ast_dir = "fixtures/ast"
catalog = "fixtures/combined.json"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.layout.max_depth, 4);
    assert_eq!(cfg.data.ast_dir.to_str(), Some("fixtures/ast"));
    assert_eq!(
        cfg.layout_options(),
        LayoutOptions {
            max_depth: 4,
            sweeps: 2,
            node_gap_x: 120.0,
            layer_gap_y: 90.5,
            node_size: 12.0,
        }
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.layout_options(), LayoutOptions::default());
    assert_eq!(cfg.data.catalog.to_str(), Some("data/combined.json"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("PrereqGraph.toml")).unwrap();
    assert_eq!(cfg.layout.max_depth, 3);
}

#[test]
fn test_missing_file_is_io_error_when_required() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PrereqGraphError::IoError(_))));
}

#[test]
fn test_zero_max_depth_is_rejected() {
    let file = write_config("[layout]\nmax_depth = 0\n");

    match load_and_validate(file.path()) {
        Err(PrereqGraphError::ConfigError(msg)) => assert!(msg.contains("max_depth")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_non_positive_spacing_is_rejected() {
    let file = write_config("[layout]\nlayer_gap_y = -5.0\n");

    match load_and_validate(file.path()) {
        Err(PrereqGraphError::ConfigError(msg)) => assert!(msg.contains("layer_gap_y")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_toml_error() {
    let file = write_config("[layout]\nmax_depth = \"deep\"\n");
    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(PrereqGraphError::TomlError(_))));
}

#[test]
fn test_builder_validates_sweeps() {
    let cfg = ConfigFileBuilder::new().max_depth(5).sweeps(8).build();
    assert_eq!(cfg.layout_options().max_depth, 5);

    let result = ConfigFileBuilder::new().sweeps(1000).try_build();
    match result {
        Err(PrereqGraphError::ConfigError(msg)) => assert!(msg.contains("sweeps")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }

    let result = ConfigFileBuilder::new().node_gap_x(f64::NAN).try_build();
    assert!(matches!(result, Err(PrereqGraphError::ConfigError(_))));
}
