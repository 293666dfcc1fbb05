//! Shared formatting utilities for emission figures and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Leaf emoji for footprint headers
pub const LEAF: Emoji = Emoji("🌿", "*");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Fire emoji for hotspots
pub const FIRE: Emoji = Emoji("🔥", "!");

/// Target emoji for scenario goals
pub const TARGET: Emoji = Emoji("🎯", ">");

/// Label emoji for the carbon label preview
pub const LABEL: Emoji = Emoji("🏷️", "#");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Placeholder for values that are undefined
pub const UNDEFINED: &str = "—";

/// Format an emission in kg CO₂e with two decimals
///
/// # Examples
///
/// ```
/// use broiler_lca::fmt::format_co2e;
///
/// assert_eq!(format_co2e(3.3449), "3.34 kg CO₂e");
/// ```
pub fn format_co2e(value: f64) -> String {
    format!("{:.2} kg CO₂e", value)
}

/// Format a percentage, or the undefined placeholder
///
/// # Examples
///
/// ```
/// use broiler_lca::fmt::format_optional_pct;
///
/// assert_eq!(format_optional_pct(Some(66.17)), "66.2%");
/// assert_eq!(format_optional_pct(None), "—");
/// ```
pub fn format_optional_pct(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), |pct| format!("{:.1}%", pct))
}

/// Format an optional number with fixed decimals, or the undefined placeholder
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(
        || UNDEFINED.to_string(),
        |v| format!("{:.*}", decimals, v),
    )
}
