//! Integration test helpers: run the CLI binary and capture its output.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_CONFIGURATION: i32 = 2;
pub const EXIT_INVALID_INPUT: i32 = 3;
pub const EXIT_IO: i32 = 4;

/// Captured result of one CLI invocation.
#[derive(Debug)]
pub struct CliRun {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRun {
    /// Parse stdout as JSON, panicking with the full output on failure.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON: {}\nstdout: {}\nstderr: {}",
                e, self.stdout, self.stderr
            )
        })
    }

    pub fn assert_success(&self) -> &Self {
        assert_eq!(
            self.exit_code, EXIT_SUCCESS,
            "expected success\nstdout: {}\nstderr: {}",
            self.stdout, self.stderr
        );
        self
    }
}

pub fn run_cli(args: &[&str]) -> CliRun {
    let output: Output = Command::new(env!("CARGO_BIN_EXE_life-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn life-cli {:?}: {}", args, e));

    CliRun {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Generate a synthetic batch document at `path`.
pub fn simulate_to(path: &Path, participants: usize, cycles: usize, seed: u64) {
    run_cli(&[
        "simulate",
        "--participants",
        &participants.to_string(),
        "--cycles",
        &cycles.to_string(),
        "--seed",
        &seed.to_string(),
        "--output",
        path.to_str().expect("temp path is UTF-8"),
    ])
    .assert_success();
}
