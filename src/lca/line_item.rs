//! Activity line items and per-subsystem subtotals
//!
//! A line item is one row of the inventory (e.g. "Soybean Meal, 0.5 kg at
//! 2.2 kg CO₂e/kg"). Subtotals group line items by production stage and are
//! always recomputed from their items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Production stage of the broiler chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    /// Feed mill: raw materials, mill energy, transport
    Feed,
    /// Broiler farm: energy, heating, manure
    Broiler,
    /// Processing plant (RPA): cooling, generators, packaging
    Processing,
}

impl Subsystem {
    /// All subsystems in chain order
    pub const ALL: [Subsystem; 3] = [Subsystem::Feed, Subsystem::Broiler, Subsystem::Processing];

    /// Display name used in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Feed => "Feed Production",
            Self::Broiler => "Broiler Farming",
            Self::Processing => "Processing (RPA)",
        }
    }

    /// Short category label used in hotspot tables
    pub fn category(&self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Broiler => "Broiler",
            Self::Processing => "Processing",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Replace negative or non-finite inputs with zero
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// One activity multiplied by its emission factor
///
/// # Examples
///
/// ```
/// use broiler_lca::lca::ActivityLineItem;
///
/// let item = ActivityLineItem::new("Corn", 0.3, "kg", Some(0.8));
/// assert!((item.emission() - 0.24).abs() < 1e-12);
///
/// // Activities without a factor contribute nothing
/// let feed = ActivityLineItem::new("Feed Consumption", 1.8, "kg", None);
/// assert_eq!(feed.emission(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLineItem {
    /// Activity name
    pub name: String,
    /// Activity quantity in `unit`
    pub quantity: f64,
    /// Unit of the quantity (kg, kWh, L, m³)
    pub unit: String,
    /// Emission factor in kg CO₂e per unit (None = undefined)
    pub factor: Option<f64>,
}

impl ActivityLineItem {
    /// Create a line item; negative or non-finite values are replaced by zero
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        factor: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: sanitize(quantity),
            unit: unit.into(),
            factor: factor.map(sanitize),
        }
    }

    /// Emission in kg CO₂e (quantity × factor)
    pub fn emission(&self) -> f64 {
        self.factor.map_or(0.0, |factor| self.quantity * factor)
    }

    /// Same activity with its quantity divided by `divisor`
    pub(crate) fn scaled(&self, divisor: f64) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity / divisor,
            unit: self.unit.clone(),
            factor: self.factor,
        }
    }
}

/// Line items of one subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemSubtotal {
    /// Which stage these items belong to
    pub subsystem: Subsystem,
    /// Line items in input order
    pub items: Vec<ActivityLineItem>,
}

impl SubsystemSubtotal {
    /// Group `items` under `subsystem`
    pub fn new(subsystem: Subsystem, items: Vec<ActivityLineItem>) -> Self {
        Self { subsystem, items }
    }

    /// Sum of line item emissions
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(ActivityLineItem::emission).sum()
    }

    /// Append a line item
    pub fn push(&mut self, item: ActivityLineItem) {
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_emission_is_quantity_times_factor() {
        let item = ActivityLineItem::new("Soybean Meal", 0.5, "kg", Some(2.2));
        assert!((item.emission() - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_line_item_without_factor_contributes_zero() {
        let item = ActivityLineItem::new("Feed Consumption", 1800.0, "kg", None);
        assert_eq!(item.emission(), 0.0);
    }

    #[test]
    fn test_line_item_negative_and_nan_inputs_become_zero() {
        let negative = ActivityLineItem::new("Diesel", -10.0, "L", Some(2.68));
        assert_eq!(negative.quantity, 0.0);
        assert_eq!(negative.emission(), 0.0);

        let nan = ActivityLineItem::new("Diesel", 10.0, "L", Some(f64::NAN));
        assert_eq!(nan.factor, Some(0.0));
        assert_eq!(nan.emission(), 0.0);

        let inf = ActivityLineItem::new("Diesel", f64::INFINITY, "L", Some(2.68));
        assert_eq!(inf.quantity, 0.0);
    }

    #[test]
    fn test_subtotal_tracks_item_changes() {
        let mut subtotal = SubsystemSubtotal::new(
            Subsystem::Processing,
            vec![ActivityLineItem::new("LDPE Packaging", 0.005, "kg", Some(2.0))],
        );
        assert!((subtotal.subtotal() - 0.01).abs() < 1e-12);

        subtotal.push(ActivityLineItem::new("PP Packaging", 0.008, "kg", Some(1.8)));
        assert!((subtotal.subtotal() - 0.0244).abs() < 1e-12);

        subtotal.items[0].quantity = 0.0;
        assert!((subtotal.subtotal() - 0.0144).abs() < 1e-12);
    }

    #[test]
    fn test_empty_subtotal_is_zero() {
        let subtotal = SubsystemSubtotal::new(Subsystem::Feed, Vec::new());
        assert_eq!(subtotal.subtotal(), 0.0);
    }

    #[test]
    fn test_scaled_divides_quantity_only() {
        let item = ActivityLineItem::new("Corn", 300.0, "kg", Some(0.8));
        let scaled = item.scaled(1000.0);
        assert!((scaled.quantity - 0.3).abs() < 1e-12);
        assert_eq!(scaled.factor, Some(0.8));
        assert_eq!(scaled.unit, "kg");
    }

    #[test]
    fn test_subsystem_names() {
        assert_eq!(Subsystem::Feed.display_name(), "Feed Production");
        assert_eq!(Subsystem::Processing.to_string(), "Processing (RPA)");
        assert_eq!(Subsystem::Broiler.category(), "Broiler");
    }
}
