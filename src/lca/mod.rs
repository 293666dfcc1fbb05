//! Carbon footprint core for the broiler production chain
//!
//! This module provides:
//! - Activity line items grouped into subsystem subtotals
//! - Aggregation into a total and LOW/MEDIUM/HIGH classification
//! - Mitigation scenario projection
//! - Hotspot ranking and carbon label grading
//!
//! Everything here is a pure function of its inputs; nothing is cached or
//! persisted between calls.

pub mod aggregator;
pub mod hotspot;
pub mod label;
pub mod line_item;
pub mod scenario;

pub use aggregator::{contribution_pct, EmissionsAggregator, FootprintResult, FootprintStatus};
pub use hotspot::{rank_hotspots, Hotspot, HotspotPriority};
pub use label::{CarbonGrade, CarbonLabel};
pub use line_item::{ActivityLineItem, Subsystem, SubsystemSubtotal};
pub use scenario::{CategoryProjection, MitigationScenario, ProjectedResult, ScenarioProjector};
