//! Config and Batch File Parsing Benchmarks
//!
//! **Purpose:** Measure performance of `.broiler-lca.toml` and batch file loading
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench config_parsing
//! ```
//!
//! **What's Being Measured:**
//! 1. `load config from file` - File I/O + TOML parsing + validation
//! 2. `load batch from file` - File I/O + TOML parsing of three sections
//! 3. `validate batch` - Range and identifier checks
//!
//! **Performance Notes:**
//! - TOML parsing uses toml_edit
//! - Identifier regexes are compiled once and cached

use broiler_lca::config::ConfigLoader;
use broiler_lca::inventory::{BatchInventory, InventoryLoader, InventoryValidator};
use criterion::{criterion_group, criterion_main, Criterion};
use std::fs;
use std::hint::black_box;
use tempfile::TempDir;

const CONFIG: &str = r#"
[thresholds]
target = 3.3
baseline = 4.35

[scenario-baseline]
total = 3.34
soybean = 1.10
manure = 0.70
cooling = 0.10

[efficacy]
soybean = 0.6
biogas = 0.7

[factors]
soybean-meal = 2.2
grid-electricity = 0.85
"#;

fn bench_load_config(c: &mut Criterion) {
    c.bench_function("load config from file", |b| {
        b.iter_batched(
            || {
                let temp_dir = TempDir::new().unwrap();
                fs::write(temp_dir.path().join(".broiler-lca.toml"), CONFIG).unwrap();
                temp_dir
            },
            |temp_dir| {
                black_box(ConfigLoader::load(temp_dir.path())).unwrap();
                drop(temp_dir);
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_load_batch(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("BATCH-2024-156.toml");
    let contents = toml_edit::ser::to_string_pretty(&BatchInventory::reference()).unwrap();
    fs::write(&path, contents).unwrap();

    c.bench_function("load batch from file", |b| {
        b.iter(|| black_box(InventoryLoader::load(&path)).unwrap());
    });
}

fn bench_validate_batch(c: &mut Criterion) {
    let batch = BatchInventory::reference();
    c.bench_function("validate batch", |b| {
        b.iter(|| black_box(InventoryValidator::validate(black_box(&batch))));
    });
}

criterion_group!(benches, bench_load_config, bench_load_batch, bench_validate_batch);
criterion_main!(benches);
