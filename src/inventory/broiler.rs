//! Broiler farm activity data

use serde::{Deserialize, Serialize};
use std::fmt;

use super::factors::{EmissionFactors, BIOGAS_CH4_RATIO, COMPOST_CH4_RATIO};
use crate::lca::ActivityLineItem;

/// How litter is handled after the flock cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WasteTreatment {
    /// Traditional storage
    Stored,
    /// Composting
    Compost,
    /// Biogas conversion
    Biogas,
}

impl WasteTreatment {
    /// Share of stored-manure CH₄ still emitted under this treatment
    pub fn ch4_ratio(&self) -> f64 {
        match self {
            Self::Stored => 1.0,
            Self::Compost => COMPOST_CH4_RATIO,
            Self::Biogas => BIOGAS_CH4_RATIO,
        }
    }
}

impl fmt::Display for WasteTreatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Stored => "Stored",
            Self::Compost => "Compost",
            Self::Biogas => "Biogas",
        };
        f.write_str(label)
    }
}

/// Qualitative biowaste impact shown next to the farm form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiowasteImpact {
    /// Biogas
    Low,
    /// Compost
    Medium,
    /// Stored
    High,
    /// No treatment recorded
    Unknown,
}

/// Broiler farming inputs for one flock
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct BroilerInput {
    /// Farm identifier (FARM-XXX)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_id: Option<String>,
    /// Flock period in days, e.g. "35-42"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flock_period: Option<String>,
    /// Harvested live weight, kg
    pub live_weight_kg: f64,
    /// Feed consumed on farm, kg (already counted under feed production)
    pub feed_consumption_kg: f64,
    /// Drinking and cleaning water, L
    pub water_l: f64,
    /// Farm electricity, kWh
    pub electricity_kwh: f64,
    /// LPG for brooding heat, kg
    pub lpg_kg: f64,
    /// Litter produced, kg
    pub litter_kg: f64,
    /// Litter treatment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_treatment: Option<WasteTreatment>,
}

fn per_kg(value: f64, weight: f64) -> Option<f64> {
    (weight > 0.0).then(|| value / weight)
}

impl BroilerInput {
    /// Treatment used for emission factors; unrecorded treatment counts as stored
    pub fn effective_treatment(&self) -> WasteTreatment {
        self.waste_treatment.unwrap_or(WasteTreatment::Stored)
    }

    /// Qualitative impact of the recorded treatment
    pub fn biowaste_impact(&self) -> BiowasteImpact {
        match self.waste_treatment {
            Some(WasteTreatment::Biogas) => BiowasteImpact::Low,
            Some(WasteTreatment::Compost) => BiowasteImpact::Medium,
            Some(WasteTreatment::Stored) => BiowasteImpact::High,
            None => BiowasteImpact::Unknown,
        }
    }

    /// kWh per kg live weight
    pub fn electricity_per_kg(&self) -> Option<f64> {
        per_kg(self.electricity_kwh, self.live_weight_kg)
    }

    /// kg litter per kg live weight
    pub fn litter_per_kg(&self) -> Option<f64> {
        per_kg(self.litter_kg, self.live_weight_kg)
    }

    /// Line items in dashboard order
    pub fn line_items(&self, factors: &EmissionFactors) -> Vec<ActivityLineItem> {
        let treatment = self.effective_treatment();
        let ch4_name = format!("Manure CH₄ ({})", treatment);
        vec![
            ActivityLineItem::new("Feed Consumption", self.feed_consumption_kg, "kg", None),
            ActivityLineItem::new("Water", self.water_l, "L", None),
            ActivityLineItem::new(
                "Electricity (Farm)",
                self.electricity_kwh,
                "kWh",
                Some(factors.grid_electricity),
            ),
            ActivityLineItem::new("LPG Heating", self.lpg_kg, "kg", Some(factors.lpg)),
            ActivityLineItem::new(
                ch4_name,
                self.litter_kg,
                "kg litter",
                Some(factors.manure_ch4_stored * treatment.ch4_ratio()),
            ),
            ActivityLineItem::new("Manure N₂O", self.litter_kg, "kg litter", Some(factors.manure_n2o)),
        ]
    }
}
