//! Processing plant (RPA) activity data

use serde::{Deserialize, Serialize};

use super::factors::EmissionFactors;
use crate::lca::line_item::sanitize;
use crate::lca::ActivityLineItem;

/// Processing inputs for one shift or batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProcessingInput {
    /// Plant identifier (RPA-XXX)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpa_id: Option<String>,
    /// Processing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Shift label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    /// Frozen carcass output, kg (the functional unit base)
    pub frozen_output_kg: f64,
    /// Total plant electricity, kWh
    pub electricity_kwh: f64,
    /// Share of electricity used for cooling and freezing, percent
    pub cooling_pct: f64,
    /// Generator diesel, L
    pub diesel_l: f64,
    /// NH₃ refrigerant leakage, kg
    pub nh3_leak_kg: f64,
    /// LDPE packaging, kg
    pub ldpe_kg: f64,
    /// PP packaging, kg
    pub pp_kg: f64,
}

fn per_output(value: f64, output: f64) -> Option<f64> {
    (output > 0.0).then(|| sanitize(value) / output)
}

impl ProcessingInput {
    /// Cooling share clamped to 0..=100
    pub fn effective_cooling_pct(&self) -> f64 {
        if self.cooling_pct.is_nan() {
            0.0
        } else {
            self.cooling_pct.clamp(0.0, 100.0)
        }
    }

    /// Electricity attributed to cooling, kWh
    pub fn cooling_energy_kwh(&self) -> f64 {
        self.electricity_kwh.max(0.0) * self.effective_cooling_pct() / 100.0
    }

    /// kWh per kg output
    pub fn energy_per_kg(&self) -> Option<f64> {
        per_output(self.electricity_kwh, self.frozen_output_kg)
    }

    /// kg packaging per kg output
    pub fn packaging_per_kg(&self) -> Option<f64> {
        per_output(sanitize(self.ldpe_kg) + sanitize(self.pp_kg), self.frozen_output_kg)
    }

    /// Cooling dominance in percent; undefined when no share is recorded
    pub fn cooling_dominance_pct(&self) -> Option<f64> {
        let pct = self.effective_cooling_pct();
        (pct > 0.0).then_some(pct)
    }

    /// Line items in dashboard order
    pub fn line_items(&self, factors: &EmissionFactors) -> Vec<ActivityLineItem> {
        let cooling = self.cooling_energy_kwh();
        let other = self.electricity_kwh.max(0.0) - cooling;
        vec![
            ActivityLineItem::new("Electricity (Cooling)", cooling, "kWh", Some(factors.grid_electricity)),
            ActivityLineItem::new("Electricity (Other)", other, "kWh", Some(factors.grid_electricity)),
            ActivityLineItem::new("Diesel (Generator)", self.diesel_l, "L", Some(factors.diesel)),
            ActivityLineItem::new("NH₃ Leakage", self.nh3_leak_kg, "kg", Some(factors.nh3_leak)),
            ActivityLineItem::new("LDPE Packaging", self.ldpe_kg, "kg", Some(factors.ldpe)),
            ActivityLineItem::new("PP Packaging", self.pp_kg, "kg", Some(factors.pp)),
        ]
    }
}
