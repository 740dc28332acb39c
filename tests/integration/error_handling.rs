use std::fs;

use clap::Parser;
use prereq_graph::cli::CliArgs;
use prereq_graph::errors::PrereqGraphError;
use prereq_graph::run;

const MATH_AST: &str = r#"[ { "code": "MATH 20B", "type": "ROOT", "children": [
    { "code": "MATH 20A", "type": "CHILD", "children": [] } ] } ]"#;

fn args(dir: &std::path::Path, rest: &[&str]) -> CliArgs {
    let config = dir.join("PrereqGraph.toml");
    let ast_dir = dir.join("ast");
    let catalog = dir.join("combined.json");
    let mut argv = vec![
        "prereq-graph".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--ast-dir".to_string(),
        ast_dir.display().to_string(),
        "--catalog".to_string(),
        catalog.display().to_string(),
    ];
    argv.extend(rest.iter().map(|s| s.to_string()));
    CliArgs::try_parse_from(argv).unwrap()
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("ast")).unwrap();
    fs::write(dir.path().join("ast/math_ast.json"), MATH_AST).unwrap();
    fs::write(dir.path().join("combined.json"), "[]").unwrap();
    dir
}

fn course_not_found(err: &anyhow::Error) -> Option<&str> {
    match err.downcast_ref::<PrereqGraphError>() {
        Some(PrereqGraphError::CourseNotFound(code)) => Some(code.as_str()),
        _ => None,
    }
}

#[test]
fn test_error_messages() {
    let err = PrereqGraphError::CourseNotFound("MATH 999".to_string());
    assert_eq!(err.to_string(), "Course not found: MATH 999");

    let err = PrereqGraphError::ConfigError("max_depth must be at least 1".to_string());
    assert!(err.to_string().starts_with("Configuration error:"));

    let err: PrereqGraphError = std::io::Error::other("boom").into();
    assert!(matches!(err, PrereqGraphError::IoError(_)));
}

#[test]
fn test_layers_for_known_course_succeeds() {
    let dir = fixture();
    run(args(dir.path(), &["layers", "math 20b"])).unwrap();
    run(args(dir.path(), &["courses", "--dept", "math"])).unwrap();
}

#[test]
fn test_layers_for_unknown_course_is_not_found() {
    let dir = fixture();
    let err = run(args(dir.path(), &["layers", "MATH 999"])).unwrap_err();
    assert_eq!(course_not_found(&err), Some("MATH 999"));
}

#[test]
fn test_info_for_unknown_course_is_not_found() {
    let dir = fixture();
    let err = run(args(dir.path(), &["info", "CSE 11"])).unwrap_err();
    assert_eq!(course_not_found(&err), Some("CSE 11"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = fixture();
    fs::write(dir.path().join("PrereqGraph.toml"), "[layout]\nsweeps = 500\n").unwrap();

    let err = run(args(dir.path(), &["courses"])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PrereqGraphError>(),
        Some(PrereqGraphError::ConfigError(_))
    ));
}

#[test]
fn test_compact_code_resolves_through_catalog() {
    let dir = fixture();
    fs::write(
        dir.path().join("combined.json"),
        r#"[
          { "course": { "code": "CSE 11" } },
          { "course": { "code": "CSE 12", "prereq": { "type": "COURSE", "course_id": "CSE 11" } } }
        ]"#,
    )
    .unwrap();

    run(args(dir.path(), &["compile", "cse12"])).unwrap();
    run(args(dir.path(), &["compile", "cse12", "--order"])).unwrap();
    run(args(dir.path(), &["layers", "cse12", "--from-catalog"])).unwrap();

    let err = run(args(dir.path(), &["compile", "cse99"])).unwrap_err();
    assert_eq!(course_not_found(&err), Some("cse99"));
}
