//! Batch and config fixture files
//!
//! Batch files are written in the same layout operators export from the
//! data entry forms: one table per subsystem, kebab-case keys.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Reference batch BATCH-2024-156 (total 2.8528 kg CO₂e/kg)
pub const REFERENCE_BATCH: &str = r#"
batch-id = "BATCH-2024-156"

[feed]
date = "2024-11-02"
feed-mill = "Mill A"
corn-kg = 300.0
soybean-meal-kg = 500.0
wheat-bran-kg = 100.0
rice-bran-kg = 80.0
fish-meal-kg = 20.0
electricity-kwh = 150.0
natural-gas-m3 = 50.0
diesel-l = 20.0

[broiler]
farm-id = "FARM-001"
flock-period = "35-42"
live-weight-kg = 1400.0
feed-consumption-kg = 1800.0
water-l = 3600.0
electricity-kwh = 80.0
lpg-kg = 15.0
litter-kg = 200.0
waste-treatment = "Stored"

[processing]
rpa-id = "RPA-001"
date = "2024-11-30"
shift = "Shift 1"
frozen-output-kg = 1000.0
electricity-kwh = 150.0
cooling-pct = 80.0
diesel-l = 10.0
nh3-leak-kg = 0.5
ldpe-kg = 5.0
pp-kg = 8.0
"#;

/// Same batch with all litter to biogas (manure CH₄ 0.21 instead of 0.70)
pub const BIOGAS_BATCH: &str = r#"
batch-id = "BATCH-2024-155"

[feed]
corn-kg = 300.0
soybean-meal-kg = 500.0
wheat-bran-kg = 100.0
rice-bran-kg = 80.0
fish-meal-kg = 20.0
electricity-kwh = 150.0
natural-gas-m3 = 50.0
diesel-l = 20.0

[broiler]
farm-id = "FARM-002"
electricity-kwh = 80.0
lpg-kg = 15.0
litter-kg = 200.0
waste-treatment = "Biogas"

[processing]
rpa-id = "RPA-001"
frozen-output-kg = 1000.0
electricity-kwh = 150.0
cooling-pct = 80.0
diesel-l = 10.0
nh3-leak-kg = 0.5
ldpe-kg = 5.0
pp-kg = 8.0
"#;

/// Heavy soybean formulation, HIGH against the default baseline (total 4.6528)
pub const HIGH_BATCH: &str = r#"
batch-id = "BATCH-2024-152"

[feed]
corn-kg = 300.0
soybean-meal-kg = 1318.1818181818182
wheat-bran-kg = 100.0
rice-bran-kg = 80.0
fish-meal-kg = 20.0
electricity-kwh = 150.0
natural-gas-m3 = 50.0
diesel-l = 20.0

[broiler]
electricity-kwh = 80.0
lpg-kg = 15.0
litter-kg = 200.0
waste-treatment = "Stored"

[processing]
frozen-output-kg = 1000.0
electricity-kwh = 150.0
cooling-pct = 80.0
diesel-l = 10.0
nh3-leak-kg = 0.5
ldpe-kg = 5.0
pp-kg = 8.0
"#;

/// Batch with the processing section not entered yet
pub const INCOMPLETE_BATCH: &str = r#"
batch-id = "BATCH-2024-154"

[feed]
soybean-meal-kg = 500.0

[broiler]
litter-kg = 200.0
"#;

/// Every section present, every quantity zero (total 0)
pub const ZERO_BATCH: &str = r#"
batch-id = "BATCH-2024-150"

[feed]

[broiler]

[processing]
frozen-output-kg = 1000.0
"#;

/// Write a batch file into `dir`
pub fn write_batch(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write batch fixture");
    path
}

/// Write `.broiler-lca.toml` into `dir`
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(".broiler-lca.toml");
    fs::write(&path, contents).expect("Failed to write config fixture");
    path
}
