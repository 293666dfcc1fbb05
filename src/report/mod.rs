//! Report rendering
//!
//! Provides:
//! - Console tables for footprints, batch rankings, scenarios and hotspots
//! - JSON output structures for scripting

pub mod display;
pub mod output;

pub use output::{CalculateOutput, FootprintInfo, HotspotInfo, HotspotsOutput};
