//! Tests for the `simulate` command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::assertions::assert_json_approx;
use common::fixtures::write_config;
use common::{bin, json_stdout};

fn simulate_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = bin()
        .arg("simulate")
        .args(args)
        .arg("--json")
        .current_dir(dir.path())
        .output()
        .expect("Command execution failed");
    assert!(output.status.success(), "simulate {:?} failed", args);
    json_stdout(&output)
}

#[test]
fn test_simulate_without_levers_reproduces_baseline() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");
    let json = simulate_json(&temp, &[]);

    assert_json_approx(&json["total"], 3.34, 1e-9);
    assert_json_approx(&json["total_reduction"], 0.0, 1e-9);
    assert_eq!(json["target_achieved"], false);
    assert_json_approx(&json["gap_to_target"], 0.04, 1e-9);
    assert_eq!(json["status"], "MEDIUM");
}

#[test]
fn test_simulate_full_soybean_substitution() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");
    let json = simulate_json(&temp, &["--soybean", "100"]);

    assert_json_approx(&json["soybean"]["projected"], 0.44, 1e-9);
    assert_json_approx(&json["total"], 2.68, 1e-9);
    assert_eq!(json["target_achieved"], true);
    assert!(json["gap_to_target"].is_null());
    assert_eq!(json["status"], "LOW");
}

#[test]
fn test_simulate_all_levers_at_maximum() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");
    let json = simulate_json(&temp, &["--soybean", "100", "--biogas", "100", "--cooling", "50"]);

    // 0.44 + 0.21 + 0.05 + 1.44
    assert_json_approx(&json["total"], 2.14, 1e-9);
    assert_json_approx(&json["other"]["projected"], 1.44, 1e-9);
    assert_json_approx(&json["other"]["reduction"], 0.0, 1e-12);
}

#[test]
fn test_simulate_clamps_out_of_range_levers() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");
    let json = simulate_json(&temp, &["--cooling", "80"]);

    assert_json_approx(&json["cooling"]["projected"], 0.05, 1e-9);
    assert_json_approx(&json["scenario"]["cooling_reduction_pct"], 50.0, 1e-12);
}

#[test]
fn test_simulate_check_fails_when_target_missed() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");

    bin()
        .args(["simulate", "--cooling", "10", "--check"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("misses target 3.3"));
}

#[test]
fn test_simulate_check_passes_when_target_achieved() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");

    bin()
        .args(["simulate", "--biogas", "50", "--check"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Target 3.30 achieved"));
}

#[test]
fn test_simulate_uses_configured_efficacy() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");
    write_config(temp.path(), "[efficacy]\nsoybean = 1.0\n");

    let json = simulate_json(&temp, &["--soybean", "100"]);
    assert_json_approx(&json["soybean"]["projected"], 0.0, 1e-12);
}

#[test]
fn test_simulate_human_output_lists_categories() {
    let temp = TempDir::new().expect("Failed to create temp directory for test");

    bin()
        .args(["simulate", "--soybean", "50"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Soybean Meal"))
        .stdout(predicate::str::contains("Manure CH₄"))
        .stdout(predicate::str::contains("Other"));
}
