//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for float comparisons
//! - Batch and config fixture files
//! - The broiler-lca binary command
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::fixtures::*;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let path = write_batch(dir.path(), "BATCH-2024-156.toml", REFERENCE_BATCH);
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// broiler-lca binary, emoji disabled so output is stable
#[allow(dead_code)]
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_broiler-lca"));
    cmd.arg("--no-emoji");
    cmd
}

/// Parse stdout of a successful `--json` run
#[allow(dead_code)]
pub fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is valid JSON")
}
