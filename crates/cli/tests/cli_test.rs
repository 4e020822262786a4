//! End-to-end tests running the openapi-opid binary

use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const IDENTIFIED: &str = r#"{"openapi":"3.0.0","paths":{"/a":{"get":{"operationId":"listA"}},"/b":{"post":{"operationId":"createB"}}}}"#;

const UNIDENTIFIED: &str = r#"{"openapi":"3.0.0","paths":{"/a":{"get":{}},"/b":{"get":{},"post":{}},"/c":{"delete":{}}}}"#;

fn opid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_openapi-opid"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run openapi-opid")
}

fn write_spec(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_unchanged_in_place_run_exits_zero_without_writing() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", IDENTIFIED);

    let out = opid(&["assign", &input]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("No changes needed"));
    // Compact input would come back pretty-printed if it had been rewritten
    assert_eq!(fs::read_to_string(&input).unwrap(), IDENTIFIED);
}

#[test]
fn test_unchanged_run_still_writes_explicit_output() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", IDENTIFIED);
    let output = dir.path().join("out.json");

    let out = opid(&["assign", &input, "-o", output.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(0));
    assert!(output.exists());
    assert_eq!(read_json(&output), serde_json::from_str::<Value>(IDENTIFIED).unwrap());
    assert_eq!(fs::read_to_string(&input).unwrap(), IDENTIFIED);
}

#[test]
fn test_partial_assigns_first_count_operations() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", UNIDENTIFIED);

    let out = opid(&["assign", &input, "--mode", "partial", "--count", "2"]);

    assert_eq!(out.status.code(), Some(0));
    let spec = read_json(Path::new(&input));
    assert_eq!(spec["paths"]["/a"]["get"]["operationId"], "getA");
    assert_eq!(spec["paths"]["/b"]["get"]["operationId"], "getB");
    assert!(spec["paths"]["/b"]["post"].get("operationId").is_none());
    assert!(spec["paths"]["/c"]["delete"].get("operationId").is_none());
}

#[test]
fn test_partial_with_zero_count_reports_reason() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", UNIDENTIFIED);

    let out = opid(&["assign", &input, "--mode", "partial", "--count", "0"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--count is 0"));
    assert_eq!(fs::read_to_string(&input).unwrap(), UNIDENTIFIED);
}

#[test]
fn test_validation_failure_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "swagger.json", r#"{"swagger":"2.0","paths":{}}"#);

    let out = opid(&["assign", &input]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Not a valid OpenAPI 3.x.x"));
}

#[test]
fn test_bad_count_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", UNIDENTIFIED);

    for bad in ["-1", "many"] {
        let out = opid(&["assign", &input, "--mode", "partial", "--count", bad]);
        assert_eq!(out.status.code(), Some(1), "--count {}", bad);
    }
    assert_eq!(fs::read_to_string(&input).unwrap(), UNIDENTIFIED);
}

#[test]
fn test_partial_without_count_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", UNIDENTIFIED);

    let out = opid(&["assign", &input, "--mode", "partial"]);

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_help_exits_zero() {
    let out = opid(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("assign"));
}

#[test]
fn test_extract_prints_catalog_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", IDENTIFIED);

    let out = opid(&["extract", &input]);

    assert_eq!(out.status.code(), Some(0));
    let catalog: Value = serde_json::from_slice(&out.stdout).unwrap();
    let ids: Vec<&str> = catalog["operations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|op| op["operationId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["listA", "createB"]);
}

#[test]
fn test_filter_writes_allowed_operations() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "api.json", IDENTIFIED);
    let output = dir.path().join("filtered.json");

    let out = opid(&[
        "filter",
        &input,
        "-o",
        output.to_str().unwrap(),
        "--allow",
        "createB",
    ]);

    assert_eq!(out.status.code(), Some(0));
    let spec = read_json(&output);
    let paths = spec["paths"].as_object().unwrap();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths["/b"]["post"]["operationId"], "createB");
}
