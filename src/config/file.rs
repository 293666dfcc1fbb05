//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::lca::FootprintStatus;

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".broiler-lca.toml";

/// broiler-lca configuration file structure
///
/// Every section is optional; missing sections fall back to the reference
/// values used by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    /// Classification thresholds
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Baseline category values used by the mitigation planner
    #[serde(default)]
    pub scenario_baseline: ScenarioBaseline,

    /// Efficacy coefficients of the mitigation levers
    #[serde(default)]
    pub efficacy: LeverEfficacy,

    /// Emission factor overrides
    #[serde(default, skip_serializing_if = "FactorOverrides::is_empty")]
    pub factors: FactorOverrides,
}

impl ConfigFile {
    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        self.scenario_baseline.validate()?;
        self.efficacy.validate()?;
        self.factors.validate()?;
        Ok(())
    }
}

/// Target and baseline footprints in kg CO₂e per kg carcass
///
/// # Examples
///
/// ```
/// use broiler_lca::config::Thresholds;
/// use broiler_lca::lca::FootprintStatus;
///
/// let thresholds = Thresholds::default();
/// assert_eq!(thresholds.classify(4.35), FootprintStatus::High);
/// assert_eq!(thresholds.classify(3.30), FootprintStatus::Low);
/// assert_eq!(thresholds.classify(3.31), FootprintStatus::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Thresholds {
    /// Totals at or below this are LOW
    #[serde(default = "default_target")]
    pub target: f64,
    /// Totals at or above this are HIGH
    #[serde(default = "default_baseline")]
    pub baseline: f64,
}

/// Reference target footprint
pub const DEFAULT_TARGET: f64 = 3.3;
/// Reference baseline footprint
pub const DEFAULT_BASELINE: f64 = 4.35;

fn default_target() -> f64 {
    DEFAULT_TARGET
}

fn default_baseline() -> f64 {
    DEFAULT_BASELINE
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            baseline: DEFAULT_BASELINE,
        }
    }
}

impl Thresholds {
    /// Ensure `0 <= target < baseline`
    pub fn validate(&self) -> Result<()> {
        if !self.target.is_finite() || !self.baseline.is_finite() {
            anyhow::bail!("Thresholds must be finite numbers");
        }
        if self.target < 0.0 {
            anyhow::bail!("Target ({}) cannot be negative", self.target);
        }
        if self.target >= self.baseline {
            anyhow::bail!(
                "Target ({}) must be below baseline ({})",
                self.target,
                self.baseline
            );
        }
        Ok(())
    }

    /// Classify a total footprint
    ///
    /// HIGH is checked first, so a degenerate configuration never reports LOW
    /// for a total that also reaches the baseline.
    pub fn classify(&self, total: f64) -> FootprintStatus {
        if total >= self.baseline {
            FootprintStatus::High
        } else if total <= self.target {
            FootprintStatus::Low
        } else {
            FootprintStatus::Medium
        }
    }

    /// Whether `total` is at or below the target
    pub fn meets_target(&self, total: f64) -> bool {
        total <= self.target
    }
}

/// Baseline values of the categories the mitigation levers act on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScenarioBaseline {
    /// Baseline total footprint
    #[serde(default = "default_baseline_total")]
    pub total: f64,
    /// Soybean meal share of the total
    #[serde(default = "default_baseline_soybean")]
    pub soybean: f64,
    /// Stored-manure CH₄ share of the total
    #[serde(default = "default_baseline_manure")]
    pub manure: f64,
    /// Processing cooling share of the total
    #[serde(default = "default_baseline_cooling")]
    pub cooling: f64,
}

fn default_baseline_total() -> f64 {
    3.34
}

fn default_baseline_soybean() -> f64 {
    1.10
}

fn default_baseline_manure() -> f64 {
    0.70
}

fn default_baseline_cooling() -> f64 {
    0.10
}

impl Default for ScenarioBaseline {
    fn default() -> Self {
        Self {
            total: default_baseline_total(),
            soybean: default_baseline_soybean(),
            manure: default_baseline_manure(),
            cooling: default_baseline_cooling(),
        }
    }
}

impl ScenarioBaseline {
    /// Residual not addressed by any lever
    pub fn other(&self) -> f64 {
        self.total - self.soybean - self.manure - self.cooling
    }

    /// Ensure values are non-negative and the tracked categories fit in the total
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("total", self.total),
            ("soybean", self.soybean),
            ("manure", self.manure),
            ("cooling", self.cooling),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Scenario baseline '{}' must be a non-negative number", name);
            }
        }
        let tracked = self.soybean + self.manure + self.cooling;
        if tracked > self.total {
            anyhow::bail!(
                "Tracked categories ({:.2}) exceed baseline total ({:.2})",
                tracked,
                self.total
            );
        }
        Ok(())
    }
}

/// Fraction of a lever's category removed at 100% adoption
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LeverEfficacy {
    /// Soybean meal substitution efficacy
    #[serde(default = "default_soybean_efficacy")]
    pub soybean: f64,
    /// Litter-to-biogas conversion efficacy
    #[serde(default = "default_biogas_efficacy")]
    pub biogas: f64,
}

fn default_soybean_efficacy() -> f64 {
    0.6
}

fn default_biogas_efficacy() -> f64 {
    0.7
}

impl Default for LeverEfficacy {
    fn default() -> Self {
        Self {
            soybean: default_soybean_efficacy(),
            biogas: default_biogas_efficacy(),
        }
    }
}

impl LeverEfficacy {
    /// Coefficients must lie in 0..=1
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("soybean", self.soybean), ("biogas", self.biogas)] {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("Efficacy '{}' ({}) must be between 0 and 1", name, value);
            }
        }
        Ok(())
    }
}

/// Per-activity emission factor overrides (kg CO₂e per unit)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FactorOverrides {
    /// Soybean meal, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soybean_meal: Option<f64>,
    /// Corn, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corn: Option<f64>,
    /// Wheat bran, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheat_bran: Option<f64>,
    /// Rice bran, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rice_bran: Option<f64>,
    /// Fish meal, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fish_meal: Option<f64>,
    /// Grid electricity, per kWh
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_electricity: Option<f64>,
    /// Natural gas, per m³
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_gas: Option<f64>,
    /// Diesel, per L
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diesel: Option<f64>,
    /// LPG, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lpg: Option<f64>,
    /// Manure CH₄ under traditional storage, per kg litter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manure_ch4_stored: Option<f64>,
    /// Manure N₂O, per kg litter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manure_n2o: Option<f64>,
    /// NH₃ refrigerant leakage, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nh3_leak: Option<f64>,
    /// LDPE packaging, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldpe: Option<f64>,
    /// PP packaging, per kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pp: Option<f64>,
}

impl FactorOverrides {
    fn entries(&self) -> [(&'static str, Option<f64>); 14] {
        [
            ("soybean-meal", self.soybean_meal),
            ("corn", self.corn),
            ("wheat-bran", self.wheat_bran),
            ("rice-bran", self.rice_bran),
            ("fish-meal", self.fish_meal),
            ("grid-electricity", self.grid_electricity),
            ("natural-gas", self.natural_gas),
            ("diesel", self.diesel),
            ("lpg", self.lpg),
            ("manure-ch4-stored", self.manure_ch4_stored),
            ("manure-n2o", self.manure_n2o),
            ("nh3-leak", self.nh3_leak),
            ("ldpe", self.ldpe),
            ("pp", self.pp),
        ]
    }

    /// No override set
    pub fn is_empty(&self) -> bool {
        self.entries().iter().all(|(_, value)| value.is_none())
    }

    /// Overrides must be non-negative
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    anyhow::bail!("Emission factor '{}' ({}) must be non-negative", name, v);
                }
            }
        }
        Ok(())
    }
}
