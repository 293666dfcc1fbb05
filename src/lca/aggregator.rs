//! Emissions aggregation and footprint classification
//!
//! Combines per-subsystem line items into subtotals and a grand total in
//! kg CO₂e per kg of functional unit, then classifies the total against the
//! configured target and baseline:
//! - LOW: total at or below target
//! - MEDIUM: strictly between target and baseline
//! - HIGH: total at or above baseline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::line_item::{Subsystem, SubsystemSubtotal};
use crate::config::Thresholds;

/// Classification of a footprint against the thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FootprintStatus {
    /// At or below target
    Low,
    /// Between target and baseline
    Medium,
    /// At or above baseline
    High,
}

impl FootprintStatus {
    /// Uppercase label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl FromStr for FootprintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown status: {} (expected low, medium or high)", s)),
        }
    }
}

impl fmt::Display for FootprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage share of `part` in `total`, undefined when total is zero
pub fn contribution_pct(part: f64, total: f64) -> Option<f64> {
    if total == 0.0 {
        None
    } else {
        Some(part / total * 100.0)
    }
}

/// Aggregated footprint of one batch
///
/// Built only by [`EmissionsAggregator::aggregate`]; every figure is derived
/// from the subtotals it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintResult {
    subtotals: Vec<SubsystemSubtotal>,
    total: f64,
    status: FootprintStatus,
    thresholds: Thresholds,
}

impl FootprintResult {
    /// Subtotals in input order
    pub fn subtotals(&self) -> &[SubsystemSubtotal] {
        &self.subtotals
    }

    /// Subtotal for one subsystem (zero if absent)
    pub fn subtotal_of(&self, subsystem: Subsystem) -> f64 {
        self.subtotals
            .iter()
            .filter(|s| s.subsystem == subsystem)
            .map(SubsystemSubtotal::subtotal)
            .sum()
    }

    /// Grand total in kg CO₂e per kg carcass
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Classification of the total
    pub fn status(&self) -> FootprintStatus {
        self.status
    }

    /// Thresholds the status was derived from
    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Share of the total contributed by `emission`, in percent
    pub fn contribution(&self, emission: f64) -> Option<f64> {
        contribution_pct(emission, self.total)
    }

    /// Reduction relative to the baseline footprint, in percent
    pub fn reduction_from_baseline_pct(&self) -> Option<f64> {
        contribution_pct(self.thresholds.baseline - self.total, self.thresholds.baseline)
    }

    /// How far the total sits above target; None once the target is met
    pub fn distance_to_target(&self) -> Option<f64> {
        if self.thresholds.meets_target(self.total) {
            None
        } else {
            Some(self.total - self.thresholds.target)
        }
    }

    /// Progress from baseline towards target, clamped to 0..=100
    pub fn progress_to_target_pct(&self) -> f64 {
        let span = self.thresholds.baseline - self.thresholds.target;
        if span <= 0.0 {
            return if self.thresholds.meets_target(self.total) {
                100.0
            } else {
                0.0
            };
        }
        ((self.thresholds.baseline - self.total) / span * 100.0).clamp(0.0, 100.0)
    }
}

/// Combines subsystem subtotals into a classified footprint
///
/// # Examples
///
/// ```
/// use broiler_lca::config::Thresholds;
/// use broiler_lca::lca::{ActivityLineItem, EmissionsAggregator, FootprintStatus, Subsystem, SubsystemSubtotal};
///
/// let aggregator = EmissionsAggregator::new(Thresholds::default());
/// let result = aggregator.aggregate(vec![
///     SubsystemSubtotal::new(Subsystem::Feed, vec![ActivityLineItem::new("Feed", 1.0, "kg", Some(2.21))]),
///     SubsystemSubtotal::new(Subsystem::Broiler, vec![ActivityLineItem::new("Farm", 1.0, "kg", Some(0.89))]),
///     SubsystemSubtotal::new(Subsystem::Processing, vec![ActivityLineItem::new("RPA", 1.0, "kg", Some(0.24))]),
/// ]);
///
/// assert!((result.total() - 3.34).abs() < 1e-9);
/// assert_eq!(result.status(), FootprintStatus::Medium);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmissionsAggregator {
    thresholds: Thresholds,
}

impl EmissionsAggregator {
    /// Create an aggregator classifying against `thresholds`
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Sum subtotals and classify the total
    pub fn aggregate(&self, subtotals: Vec<SubsystemSubtotal>) -> FootprintResult {
        let total = subtotals.iter().map(SubsystemSubtotal::subtotal).sum();
        let status = self.thresholds.classify(total);

        log::debug!(
            "Aggregated {} subsystems: total {:.4} kg CO2e/kg ({})",
            subtotals.len(),
            total,
            status
        );

        FootprintResult {
            subtotals,
            total,
            status,
            thresholds: self.thresholds,
        }
    }
}
