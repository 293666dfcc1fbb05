//! Feed mill activity data

use serde::{Deserialize, Serialize};

use super::factors::EmissionFactors;
use crate::lca::{contribution_pct, ActivityLineItem};

/// Feed production inputs for one batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FeedInput {
    /// Production date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Feed mill name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_mill: Option<String>,
    /// Corn, kg
    pub corn_kg: f64,
    /// Soybean meal, kg
    pub soybean_meal_kg: f64,
    /// Wheat bran, kg
    pub wheat_bran_kg: f64,
    /// Rice bran, kg
    pub rice_bran_kg: f64,
    /// Fish meal, kg
    pub fish_meal_kg: f64,
    /// Feed mill electricity, kWh
    pub electricity_kwh: f64,
    /// Natural gas, m³
    pub natural_gas_m3: f64,
    /// Transport diesel, L
    pub diesel_l: f64,
}

impl FeedInput {
    /// Sum of all raw materials in kg
    pub fn total_feed_kg(&self) -> f64 {
        self.corn_kg + self.soybean_meal_kg + self.wheat_bran_kg + self.rice_bran_kg + self.fish_meal_kg
    }

    /// Soybean meal share of the formulation, in percent
    pub fn soybean_share_pct(&self) -> Option<f64> {
        let total = self.total_feed_kg();
        if total > 0.0 {
            contribution_pct(self.soybean_meal_kg, total)
        } else {
            None
        }
    }

    /// Line items in dashboard order
    pub fn line_items(&self, factors: &EmissionFactors) -> Vec<ActivityLineItem> {
        vec![
            ActivityLineItem::new("Soybean Meal", self.soybean_meal_kg, "kg", Some(factors.soybean_meal)),
            ActivityLineItem::new("Corn", self.corn_kg, "kg", Some(factors.corn)),
            ActivityLineItem::new("Wheat Bran", self.wheat_bran_kg, "kg", Some(factors.wheat_bran)),
            ActivityLineItem::new("Rice Bran", self.rice_bran_kg, "kg", Some(factors.rice_bran)),
            ActivityLineItem::new("Fish Meal", self.fish_meal_kg, "kg", Some(factors.fish_meal)),
            ActivityLineItem::new(
                "Electricity (Feed Mill)",
                self.electricity_kwh,
                "kWh",
                Some(factors.grid_electricity),
            ),
            ActivityLineItem::new("Natural Gas", self.natural_gas_m3, "m³", Some(factors.natural_gas)),
            ActivityLineItem::new("Diesel Transport", self.diesel_l, "L", Some(factors.diesel)),
        ]
    }
}
