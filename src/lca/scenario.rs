//! Mitigation scenario projection
//!
//! Three independent levers act on three baseline categories:
//! - soybean meal substitution (efficacy-discounted, default 60%)
//! - litter-to-biogas conversion (efficacy-discounted, default 70%)
//! - cooling energy reduction (linear)
//!
//! The residual "other" category is never reduced. Projection is a pure
//! function of the scenario and the baseline; the baseline is never mutated.

use serde::{Deserialize, Serialize};

use super::aggregator::{contribution_pct, FootprintStatus};
use crate::config::{LeverEfficacy, ScenarioBaseline, Thresholds};

/// Upper bound of the soybean substitution lever
pub const MAX_SOYBEAN_PCT: f64 = 100.0;
/// Upper bound of the biogas conversion lever
pub const MAX_BIOGAS_PCT: f64 = 100.0;
/// Upper bound of the cooling reduction lever (max feasible)
pub const MAX_COOLING_PCT: f64 = 50.0;

fn clamp_pct(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// Lever positions in percent
///
/// # Examples
///
/// ```
/// use broiler_lca::lca::MitigationScenario;
///
/// // Out-of-range positions are clamped to the lever domain
/// let scenario = MitigationScenario::new(120.0, -5.0, 80.0);
/// assert_eq!(scenario.soybean_substitution_pct(), 100.0);
/// assert_eq!(scenario.litter_biogas_pct(), 0.0);
/// assert_eq!(scenario.cooling_reduction_pct(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MitigationScenario {
    soybean_substitution_pct: f64,
    litter_biogas_pct: f64,
    cooling_reduction_pct: f64,
}

impl MitigationScenario {
    /// Create a scenario, clamping each lever to its domain
    pub fn new(soybean_substitution_pct: f64, litter_biogas_pct: f64, cooling_reduction_pct: f64) -> Self {
        Self {
            soybean_substitution_pct: clamp_pct(soybean_substitution_pct, MAX_SOYBEAN_PCT),
            litter_biogas_pct: clamp_pct(litter_biogas_pct, MAX_BIOGAS_PCT),
            cooling_reduction_pct: clamp_pct(cooling_reduction_pct, MAX_COOLING_PCT),
        }
    }

    /// Soybean meal substitution, 0..=100
    pub fn soybean_substitution_pct(&self) -> f64 {
        self.soybean_substitution_pct
    }

    /// Litter converted to biogas, 0..=100
    pub fn litter_biogas_pct(&self) -> f64 {
        self.litter_biogas_pct
    }

    /// Cooling energy reduction, 0..=50
    pub fn cooling_reduction_pct(&self) -> f64 {
        self.cooling_reduction_pct
    }
}

/// Baseline, projected value and reduction of one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryProjection {
    /// Baseline value in kg CO₂e/kg
    pub baseline: f64,
    /// Value after mitigation
    pub projected: f64,
    /// baseline - projected
    pub reduction: f64,
}

impl CategoryProjection {
    fn new(baseline: f64, reduction: f64) -> Self {
        Self {
            baseline,
            projected: baseline - reduction,
            reduction,
        }
    }
}

/// Outcome of a mitigation scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedResult {
    /// Scenario that produced this projection
    pub scenario: MitigationScenario,
    /// Soybean meal category
    pub soybean: CategoryProjection,
    /// Manure CH₄ category
    pub manure: CategoryProjection,
    /// Processing cooling category
    pub cooling: CategoryProjection,
    /// Residual, never reduced
    pub other: CategoryProjection,
    /// Baseline total
    pub baseline_total: f64,
    /// Projected total
    pub total: f64,
    /// Classification of the projected total
    pub status: FootprintStatus,
    /// baseline_total - total
    pub total_reduction: f64,
    /// Reduction as percent of baseline total (None when baseline total is 0)
    pub reduction_pct: Option<f64>,
    /// Target used for the comparison
    pub target: f64,
    /// total <= target
    pub target_achieved: bool,
    /// total - target when the target is missed
    pub gap_to_target: Option<f64>,
}

/// Projects mitigation scenarios over a fixed baseline
///
/// # Examples
///
/// ```
/// use broiler_lca::lca::{MitigationScenario, ScenarioProjector};
///
/// let projector = ScenarioProjector::default();
/// let result = projector.project(&MitigationScenario::new(100.0, 0.0, 0.0));
/// assert!((result.soybean.projected - 0.44).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioProjector {
    baseline: ScenarioBaseline,
    efficacy: LeverEfficacy,
    thresholds: Thresholds,
}

impl ScenarioProjector {
    /// Create a projector
    pub fn new(baseline: ScenarioBaseline, efficacy: LeverEfficacy, thresholds: Thresholds) -> Self {
        Self {
            baseline,
            efficacy,
            thresholds,
        }
    }

    /// Baseline the projector works from
    pub fn baseline(&self) -> &ScenarioBaseline {
        &self.baseline
    }

    /// Project a scenario
    pub fn project(&self, scenario: &MitigationScenario) -> ProjectedResult {
        let b = &self.baseline;

        let soybean = CategoryProjection::new(
            b.soybean,
            b.soybean * (scenario.soybean_substitution_pct / 100.0) * self.efficacy.soybean,
        );
        let manure = CategoryProjection::new(
            b.manure,
            b.manure * (scenario.litter_biogas_pct / 100.0) * self.efficacy.biogas,
        );
        let cooling = CategoryProjection::new(
            b.cooling,
            b.cooling * (scenario.cooling_reduction_pct / 100.0),
        );
        let other = CategoryProjection::new(b.other(), 0.0);

        let total = soybean.projected + manure.projected + cooling.projected + other.projected;
        let total_reduction = b.total - total;
        let target_achieved = self.thresholds.meets_target(total);

        log::debug!(
            "Scenario soy={}% biogas={}% cooling={}% -> {:.4} kg CO2e/kg",
            scenario.soybean_substitution_pct,
            scenario.litter_biogas_pct,
            scenario.cooling_reduction_pct,
            total
        );

        ProjectedResult {
            scenario: *scenario,
            soybean,
            manure,
            cooling,
            other,
            baseline_total: b.total,
            total,
            status: self.thresholds.classify(total),
            total_reduction,
            reduction_pct: contribution_pct(total_reduction, b.total),
            target: self.thresholds.target,
            target_achieved,
            gap_to_target: (!target_achieved).then(|| total - self.thresholds.target),
        }
    }
}
