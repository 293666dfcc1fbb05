//! Emission factor table
//!
//! Default factors follow IPCC 2021, Ecoinvent 3.8 and the local grid mix
//! figures used by the reference dashboard. Every value can be overridden in
//! the `[factors]` section of `.broiler-lca.toml`.

use serde::{Deserialize, Serialize};

use crate::config::FactorOverrides;

/// Fraction of stored-manure CH₄ still emitted when litter is composted
pub const COMPOST_CH4_RATIO: f64 = 0.5;
/// Fraction of stored-manure CH₄ still emitted after biogas conversion
pub const BIOGAS_CH4_RATIO: f64 = 0.3;

/// Emission factors in kg CO₂e per activity unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// Soybean meal, per kg
    pub soybean_meal: f64,
    /// Corn, per kg
    pub corn: f64,
    /// Wheat bran, per kg
    pub wheat_bran: f64,
    /// Rice bran, per kg
    pub rice_bran: f64,
    /// Fish meal, per kg
    pub fish_meal: f64,
    /// Grid electricity, per kWh
    pub grid_electricity: f64,
    /// Natural gas, per m³
    pub natural_gas: f64,
    /// Diesel, per L
    pub diesel: f64,
    /// LPG, per kg
    pub lpg: f64,
    /// Manure CH₄ under traditional storage, per kg litter
    pub manure_ch4_stored: f64,
    /// Manure N₂O, per kg litter
    pub manure_n2o: f64,
    /// NH₃ refrigerant leakage, per kg
    pub nh3_leak: f64,
    /// LDPE packaging, per kg
    pub ldpe: f64,
    /// PP packaging, per kg
    pub pp: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            soybean_meal: 2.2,
            corn: 0.8,
            wheat_bran: 0.6,
            rice_bran: 0.5,
            fish_meal: 3.5,
            grid_electricity: 0.85,
            natural_gas: 2.0,
            diesel: 2.68,
            lpg: 3.0,
            manure_ch4_stored: 3.5,
            manure_n2o: 0.35,
            nh3_leak: 0.0,
            ldpe: 2.0,
            pp: 1.8,
        }
    }
}

impl EmissionFactors {
    /// Default table with configured overrides applied
    ///
    /// # Examples
    ///
    /// ```
    /// use broiler_lca::config::FactorOverrides;
    /// use broiler_lca::inventory::EmissionFactors;
    ///
    /// let overrides = FactorOverrides { grid_electricity: Some(0.5), ..Default::default() };
    /// let factors = EmissionFactors::with_overrides(&overrides);
    /// assert_eq!(factors.grid_electricity, 0.5);
    /// assert_eq!(factors.diesel, 2.68);
    /// ```
    pub fn with_overrides(overrides: &FactorOverrides) -> Self {
        let base = Self::default();
        Self {
            soybean_meal: overrides.soybean_meal.unwrap_or(base.soybean_meal),
            corn: overrides.corn.unwrap_or(base.corn),
            wheat_bran: overrides.wheat_bran.unwrap_or(base.wheat_bran),
            rice_bran: overrides.rice_bran.unwrap_or(base.rice_bran),
            fish_meal: overrides.fish_meal.unwrap_or(base.fish_meal),
            grid_electricity: overrides.grid_electricity.unwrap_or(base.grid_electricity),
            natural_gas: overrides.natural_gas.unwrap_or(base.natural_gas),
            diesel: overrides.diesel.unwrap_or(base.diesel),
            lpg: overrides.lpg.unwrap_or(base.lpg),
            manure_ch4_stored: overrides.manure_ch4_stored.unwrap_or(base.manure_ch4_stored),
            manure_n2o: overrides.manure_n2o.unwrap_or(base.manure_n2o),
            nh3_leak: overrides.nh3_leak.unwrap_or(base.nh3_leak),
            ldpe: overrides.ldpe.unwrap_or(base.ldpe),
            pp: overrides.pp.unwrap_or(base.pp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let factors = EmissionFactors::with_overrides(&FactorOverrides::default());
        assert_eq!(factors, EmissionFactors::default());
    }

    #[test]
    fn test_treatment_ratios_reduce_ch4() {
        let stored = EmissionFactors::default().manure_ch4_stored;
        assert!((stored * BIOGAS_CH4_RATIO - 1.05).abs() < 1e-12);
        assert!((stored * COMPOST_CH4_RATIO - 1.75).abs() < 1e-12);
    }
}
