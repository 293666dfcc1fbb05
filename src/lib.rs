#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! broiler-lca library
//!
//! This library provides the core functionality for cradle-to-gate carbon
//! footprint assessment of frozen broiler carcass. It can be used
//! programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Calculating a batch and classifying it:
//!
//! ```
//! use broiler_lca::inventory::{BatchInventory, EmissionFactors};
//! use broiler_lca::lca::{EmissionsAggregator, FootprintStatus};
//!
//! let batch = BatchInventory::reference();
//! let result = batch
//!     .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
//!     .unwrap();
//!
//! assert_eq!(result.subtotals().len(), 3);
//! assert_eq!(result.status(), FootprintStatus::Low);
//! ```
//!
//! # Advanced Example: Mitigation Planning
//!
//! Projecting a scenario against custom thresholds:
//!
//! ```
//! use broiler_lca::config::{LeverEfficacy, ScenarioBaseline, Thresholds};
//! use broiler_lca::lca::{MitigationScenario, ScenarioProjector};
//!
//! let projector = ScenarioProjector::new(
//!     ScenarioBaseline::default(),
//!     LeverEfficacy::default(),
//!     Thresholds::default(),
//! );
//!
//! // 25% soybean substitution takes 0.165 off the 3.34 baseline
//! let result = projector.project(&MitigationScenario::new(25.0, 0.0, 0.0));
//! assert!(result.target_achieved);
//! assert!((result.total - 3.175).abs() < 1e-9);
//! ```
//!
//! # Advanced Example: Hotspots
//!
//! ```
//! use broiler_lca::inventory::{BatchInventory, EmissionFactors};
//! use broiler_lca::lca::{rank_hotspots, EmissionsAggregator, HotspotPriority};
//!
//! let result = BatchInventory::reference()
//!     .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
//!     .unwrap();
//! let hotspots = rank_hotspots(&result);
//!
//! assert_eq!(hotspots[0].source, "Soybean Meal");
//! assert_eq!(hotspots[0].priority, HotspotPriority::Critical);
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Enhanced error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Batch activity data, emission factors and validation
pub mod inventory;
/// Footprint aggregation, scenarios, hotspots and labels
pub mod lca;
/// Console and JSON report rendering
pub mod report;
