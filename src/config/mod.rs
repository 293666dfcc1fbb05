//! Configuration management for broiler-lca
//!
//! This module provides:
//! - .broiler-lca.toml config file support
//! - Classification thresholds, mitigation baseline and lever efficacy
//! - Emission factor overrides

pub mod file;
pub mod loader;

pub use file::{
    ConfigFile, FactorOverrides, LeverEfficacy, ScenarioBaseline, Thresholds, CONFIG_FILE_NAME,
    DEFAULT_BASELINE, DEFAULT_TARGET,
};
pub use loader::ConfigLoader;
