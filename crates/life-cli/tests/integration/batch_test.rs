use std::fs;

use serde_json::json;

use crate::helpers::{
    run_cli, simulate_to, EXIT_INVALID_CONFIGURATION, EXIT_IO, EXIT_SUCCESS,
};

#[test]
fn test_batch_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    simulate_to(&path, 12, 5, 7);

    let run = run_cli(&["batch", "--input", path.to_str().unwrap(), "--json"]);
    let result = run.assert_success().json();
    assert_eq!(result["total"], 12);
    assert_eq!(result["count"], 12);
    assert_eq!(result["outcomes"].as_array().unwrap().len(), 12);
    let mean = result["summary"]["mean"].as_f64().unwrap();
    assert!(mean > 0.0 && mean <= 1.0);
}

#[test]
fn test_batch_parallel_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    simulate_to(&path, 30, 4, 3);
    let input = path.to_str().unwrap();

    let mut seq = run_cli(&["batch", "--input", input, "--json"]).json();
    let mut par = run_cli(&["batch", "--input", input, "--json", "--parallel"]).json();
    seq["duration_us"] = json!(0);
    par["duration_us"] = json!(0);
    assert_eq!(seq, par);
}

#[test]
fn test_batch_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    let document = json!({
        "entities": [
            {
                "initial": {
                    "entity_id": "good",
                    "traits": { "focus": { "kind": "saturating", "value": 10.0 } }
                },
                "observations": [
                    { "entity_id": "good", "engagement": 1.0, "elapsed_time": 1.0 }
                ]
            },
            {
                "initial": {
                    "entity_id": "bad",
                    "traits": { "focus": { "kind": "saturating", "value": 10.0 } }
                },
                "observations": [
                    { "entity_id": "bad", "engagement": 1.0, "elapsed_time": -1.0 }
                ]
            }
        ]
    });
    fs::write(&path, document.to_string()).unwrap();

    let run = run_cli(&["batch", "--input", path.to_str().unwrap()]);
    assert_eq!(run.exit_code, EXIT_SUCCESS, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("2 total, 1 succeeded, 1 failed"));
    assert!(run.stdout.contains("[1] bad"));
}

#[test]
fn test_batch_empty_document_reports_undefined() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let run = run_cli(&["batch", "--input", path.to_str().unwrap(), "--json"]);
    let result = run.assert_success().json();
    assert_eq!(result["total"], 0);
    assert!(result["summary"].is_null());
}

#[test]
fn test_batch_metric_and_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.json");
    simulate_to(&path, 10, 3, 11);

    let run = run_cli(&[
        "batch",
        "--input",
        path.to_str().unwrap(),
        "--json",
        "--metric",
        "trait:neuroplasticity",
        "--threshold",
        "0",
        "--threshold",
        "1000",
    ]);
    let result = run.assert_success().json();
    let significance = result["significance"].as_array().unwrap();
    assert_eq!(significance.len(), 2);
    assert_eq!(significance[1]["count"], 0);
}

#[test]
fn test_batch_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let run = run_cli(&["batch", "--input", path.to_str().unwrap()]);
    assert_eq!(run.exit_code, EXIT_IO);
}

#[test]
fn test_batch_invalid_config_in_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad_config.json");
    fs::write(
        &path,
        json!({ "config": { "update": { "saturation_level": -5.0 } }, "entities": [] }).to_string(),
    )
    .unwrap();

    let run = run_cli(&["batch", "--input", path.to_str().unwrap()]);
    assert_eq!(run.exit_code, EXIT_INVALID_CONFIGURATION);
}
