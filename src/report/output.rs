//! JSON output structures for scripting and dashboards

use serde::Serialize;

use crate::lca::{
    ActivityLineItem, FootprintResult, FootprintStatus, Hotspot, HotspotPriority, Subsystem,
    SubsystemSubtotal,
};

/// One line item with its share of the total
#[derive(Debug, Clone, Serialize)]
pub struct LineItemInfo {
    /// Activity name
    pub name: String,
    /// Quantity per kg carcass
    pub quantity: f64,
    /// Quantity unit
    pub unit: String,
    /// Emission factor, null when undefined
    pub factor: Option<f64>,
    /// kg CO₂e per kg carcass
    pub emission: f64,
    /// Share of the batch total, null when the total is zero
    pub share_pct: Option<f64>,
}

impl LineItemInfo {
    fn new(item: &ActivityLineItem, result: &FootprintResult) -> Self {
        let emission = item.emission();
        Self {
            name: item.name.clone(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            factor: item.factor,
            emission,
            share_pct: result.contribution(emission),
        }
    }
}

/// One subsystem subtotal
#[derive(Debug, Clone, Serialize)]
pub struct SubsystemInfo {
    /// Subsystem key
    pub subsystem: Subsystem,
    /// Display name
    pub name: String,
    /// Subtotal in kg CO₂e per kg carcass
    pub subtotal: f64,
    /// Share of the batch total
    pub share_pct: Option<f64>,
    /// Line items in input order
    pub items: Vec<LineItemInfo>,
}

impl SubsystemInfo {
    fn new(subtotal: &SubsystemSubtotal, result: &FootprintResult) -> Self {
        let value = subtotal.subtotal();
        Self {
            subsystem: subtotal.subsystem,
            name: subtotal.subsystem.display_name().to_string(),
            subtotal: value,
            share_pct: result.contribution(value),
            items: subtotal
                .items
                .iter()
                .map(|item| LineItemInfo::new(item, result))
                .collect(),
        }
    }
}

/// Footprint of one batch
#[derive(Debug, Clone, Serialize)]
pub struct FootprintInfo {
    /// Batch identifier
    pub batch_id: String,
    /// Total kg CO₂e per kg carcass
    pub total: f64,
    /// LOW / MEDIUM / HIGH
    pub status: FootprintStatus,
    /// Target threshold
    pub target: f64,
    /// Baseline threshold
    pub baseline: f64,
    /// Reduction versus baseline in percent
    pub reduction_from_baseline_pct: Option<f64>,
    /// total - target, null once the target is met
    pub distance_to_target: Option<f64>,
    /// Progress from baseline to target, 0-100
    pub progress_to_target_pct: f64,
    /// Subsystem breakdown
    pub subsystems: Vec<SubsystemInfo>,
}

impl FootprintInfo {
    /// Convert from a calculated footprint
    pub fn from_result(batch_id: &str, result: &FootprintResult) -> Self {
        let thresholds = result.thresholds();
        Self {
            batch_id: batch_id.to_string(),
            total: result.total(),
            status: result.status(),
            target: thresholds.target,
            baseline: thresholds.baseline,
            reduction_from_baseline_pct: result.reduction_from_baseline_pct(),
            distance_to_target: result.distance_to_target(),
            progress_to_target_pct: result.progress_to_target_pct(),
            subsystems: result
                .subtotals()
                .iter()
                .map(|s| SubsystemInfo::new(s, result))
                .collect(),
        }
    }
}

/// Output of `calculate`
#[derive(Debug, Clone, Serialize)]
pub struct CalculateOutput {
    /// True when no batch is HIGH
    pub success: bool,
    /// Batches ranked by total, highest first
    pub batches: Vec<FootprintInfo>,
}

/// One ranked hotspot
#[derive(Debug, Clone, Serialize)]
pub struct HotspotInfo {
    /// 1-based rank
    pub rank: usize,
    /// Activity name
    pub source: String,
    /// Owning subsystem
    pub subsystem: Subsystem,
    /// kg CO₂e per kg carcass
    pub emission: f64,
    /// Share of the batch total
    pub share_pct: f64,
    /// Mitigation priority
    pub priority: HotspotPriority,
    /// Guidance for well-known sources among the top three
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl From<&Hotspot> for HotspotInfo {
    fn from(hotspot: &Hotspot) -> Self {
        Self {
            rank: hotspot.rank,
            source: hotspot.source.clone(),
            subsystem: hotspot.subsystem,
            emission: hotspot.emission,
            share_pct: hotspot.share_pct,
            priority: hotspot.priority,
            recommendation: hotspot
                .recommendation()
                .filter(|_| hotspot.is_advised())
                .map(str::to_string),
        }
    }
}

/// Output of `hotspots`
#[derive(Debug, Clone, Serialize)]
pub struct HotspotsOutput {
    /// Batch identifier
    pub batch_id: String,
    /// Batch total
    pub total: f64,
    /// Ranked sources
    pub hotspots: Vec<HotspotInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{BatchInventory, EmissionFactors};
    use crate::lca::{rank_hotspots, EmissionsAggregator};

    fn reference() -> FootprintResult {
        BatchInventory::reference()
            .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
            .unwrap()
    }

    #[test]
    fn test_footprint_info_serializes_breakdown() {
        let info = FootprintInfo::from_result("BATCH-2024-156", &reference());
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["batch_id"], "BATCH-2024-156");
        assert_eq!(json["status"], "LOW");
        assert_eq!(json["subsystems"].as_array().unwrap().len(), 3);
        assert_eq!(json["subsystems"][0]["subsystem"], "feed");
        assert_eq!(json["subsystems"][0]["items"][0]["name"], "Soybean Meal");
    }

    #[test]
    fn test_undefined_factor_serializes_as_null() {
        let info = FootprintInfo::from_result("BATCH-2024-156", &reference());
        let json = serde_json::to_value(&info).unwrap();
        let feed_consumption = &json["subsystems"][1]["items"][0];
        assert_eq!(feed_consumption["name"], "Feed Consumption");
        assert!(feed_consumption["factor"].is_null());
        assert_eq!(feed_consumption["emission"], 0.0);
    }

    #[test]
    fn test_zero_total_shares_are_null() {
        let result = EmissionsAggregator::default().aggregate(vec![]);
        let info = FootprintInfo::from_result("EMPTY", &result);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["total"], 0.0);
        assert!(json["subsystems"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_hotspot_info_carries_recommendation() {
        let hotspots = rank_hotspots(&reference());
        let info = HotspotInfo::from(&hotspots[0]);
        assert_eq!(info.source, "Soybean Meal");
        assert!(info.recommendation.is_some());

        // Cooling electricity is recognised but ranks below the top three
        let cooling = hotspots
            .iter()
            .find(|h| h.source == "Electricity (Cooling)")
            .unwrap();
        assert!(cooling.rank > 3);
        assert!(HotspotInfo::from(cooling).recommendation.is_none());
    }
}
