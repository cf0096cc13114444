use crate::helpers::{run_cli, EXIT_INVALID_INPUT};

#[test]
fn test_update_saturating_json() {
    let run = run_cli(&[
        "update",
        "--kind",
        "saturating",
        "--value",
        "50",
        "--engagement",
        "2",
        "--elapsed-time",
        "9",
        "--json",
    ]);
    let out = run.assert_success().json();
    let next = out["next"].as_f64().unwrap();
    assert!((next - 50.1151).abs() < 1e-4);
    assert_eq!(out["kind"], "saturating");
}

#[test]
fn test_update_linear_text() {
    let run = run_cli(&[
        "update",
        "--kind",
        "linear",
        "--value",
        "0",
        "--engagement",
        "1",
        "--environmental-factor",
        "-0.5",
    ]);
    run.assert_success();
    assert!(run.stdout.starts_with("linear:"));
}

#[test]
fn test_update_negative_elapsed_rejected() {
    let run = run_cli(&[
        "update",
        "--kind",
        "saturating",
        "--value",
        "10",
        "--engagement",
        "1",
        "--elapsed-time",
        "-2",
    ]);
    assert_eq!(run.exit_code, EXIT_INVALID_INPUT);
}

#[test]
fn test_project_json() {
    let run = run_cli(&["project", "--trait", "a=1", "--trait", "b=3", "--json"]);
    let out = run.assert_success().json();
    assert!((out["normalized"]["a"].as_f64().unwrap() - 0.25).abs() < 1e-12);
    assert!((out["coherence"].as_f64().unwrap() - 0.625).abs() < 1e-12);
    assert_eq!(out["degenerate"], false);
}

#[test]
fn test_project_all_zero_is_degenerate() {
    let run = run_cli(&["project", "--trait", "a=0", "--trait", "b=0"]);
    run.assert_success();
    assert!(run.stdout.contains("degenerate"));
}

#[test]
fn test_project_malformed_trait() {
    let run = run_cli(&["project", "--trait", "a"]);
    assert_ne!(run.exit_code, 0);
}
