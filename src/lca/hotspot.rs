//! Emission hotspot ranking
//!
//! Flattens every line item of a footprint into a ranked list so the largest
//! sources can be targeted first.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregator::FootprintResult;
use super::line_item::Subsystem;

/// Share of total at or above which a source is Critical
pub const CRITICAL_SHARE_PCT: f64 = 30.0;
/// Share of total at or above which a source is High
pub const HIGH_SHARE_PCT: f64 = 15.0;
/// Share of total at or above which a source is Medium
pub const MEDIUM_SHARE_PCT: f64 = 5.0;
/// Number of top-ranked hotspots that are shown with mitigation guidance
pub const ADVISED_HOTSPOTS: usize = 3;

/// Mitigation priority of a hotspot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HotspotPriority {
    /// Under 5% of the total
    Low,
    /// 5% to 15%
    Medium,
    /// 15% to 30%
    High,
    /// 30% and above
    Critical,
}

impl HotspotPriority {
    /// Priority for a share of the total in percent
    pub fn from_share(share_pct: f64) -> Self {
        if share_pct >= CRITICAL_SHARE_PCT {
            Self::Critical
        } else if share_pct >= HIGH_SHARE_PCT {
            Self::High
        } else if share_pct >= MEDIUM_SHARE_PCT {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for HotspotPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// One ranked emission source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// 1-based rank
    pub rank: usize,
    /// Activity name
    pub source: String,
    /// Subsystem the activity belongs to
    pub subsystem: Subsystem,
    /// Emission in kg CO₂e/kg
    pub emission: f64,
    /// Share of the footprint total in percent
    pub share_pct: f64,
    /// Mitigation priority
    pub priority: HotspotPriority,
}

impl Hotspot {
    /// Whether this hotspot ranks high enough to be shown with guidance
    pub fn is_advised(&self) -> bool {
        self.rank <= ADVISED_HOTSPOTS
    }

    /// Mitigation guidance for well-known sources
    pub fn recommendation(&self) -> Option<&'static str> {
        let source = self.source.to_lowercase();
        if source.contains("soybean") {
            Some("Soybean meal dominates feed emissions through land use change, fertilizer use and long supply chains. Consider insect meal, algae or locally sourced proteins.")
        } else if source.contains("manure ch") {
            Some("Stored manure emits CH₄ through anaerobic decomposition. Biogas conversion or composting can cut this by 60-70%.")
        } else if source.contains("corn") {
            Some("Corn emissions stem from fertilizer application and machinery use. Optimize feed formulation and source from sustainable farms.")
        } else if source.contains("cooling") {
            Some("Cooling dominates processing energy. Improve insulation, use variable speed compressors and renewable electricity.")
        } else {
            None
        }
    }
}

/// Rank all non-zero line items of `result` by emission, largest first
///
/// Returns an empty list when the total is zero.
pub fn rank_hotspots(result: &FootprintResult) -> Vec<Hotspot> {
    let mut sources: Vec<(String, Subsystem, f64)> = result
        .subtotals()
        .iter()
        .flat_map(|subtotal| {
            subtotal
                .items
                .iter()
                .map(move |item| (item.name.clone(), subtotal.subsystem, item.emission()))
        })
        .filter(|(_, _, emission)| *emission > 0.0)
        .collect();

    // Stable sort keeps input order between equal emissions
    sources.sort_by(|a, b| b.2.total_cmp(&a.2));

    sources
        .into_iter()
        .enumerate()
        .filter_map(|(index, (source, subsystem, emission))| {
            let share_pct = result.contribution(emission)?;
            Some(Hotspot {
                rank: index + 1,
                source,
                subsystem,
                emission,
                share_pct,
                priority: HotspotPriority::from_share(share_pct),
            })
        })
        .collect()
}
