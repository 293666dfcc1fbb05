//! Batch inventory: the three subsystem records of one production batch

use serde::{Deserialize, Serialize};

use super::broiler::{BroilerInput, WasteTreatment};
use super::factors::EmissionFactors;
use super::feed::FeedInput;
use super::processing::ProcessingInput;
use crate::error::LcaError;
use crate::lca::{EmissionsAggregator, FootprintResult, Subsystem, SubsystemSubtotal};

/// Activity data for one batch
///
/// A batch can be calculated only once all three sections have been entered.
///
/// # Examples
///
/// ```
/// use broiler_lca::inventory::{BatchInventory, EmissionFactors};
/// use broiler_lca::lca::EmissionsAggregator;
///
/// let batch = BatchInventory::reference();
/// let result = batch
///     .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
///     .unwrap();
/// assert!(result.total() > 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BatchInventory {
    /// Batch identifier (BATCH-YYYY-NNN)
    #[serde(default)]
    pub batch_id: String,
    /// Feed mill section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<FeedInput>,
    /// Farm section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broiler: Option<BroilerInput>,
    /// Processing plant section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<ProcessingInput>,
}

impl BatchInventory {
    /// Empty batch with only an identifier
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            ..Default::default()
        }
    }

    /// Built-in reference batch BATCH-2024-156
    pub fn reference() -> Self {
        Self {
            batch_id: "BATCH-2024-156".to_string(),
            feed: Some(FeedInput {
                date: Some("2024-11-02".to_string()),
                feed_mill: Some("Mill A".to_string()),
                corn_kg: 300.0,
                soybean_meal_kg: 500.0,
                wheat_bran_kg: 100.0,
                rice_bran_kg: 80.0,
                fish_meal_kg: 20.0,
                electricity_kwh: 150.0,
                natural_gas_m3: 50.0,
                diesel_l: 20.0,
            }),
            broiler: Some(BroilerInput {
                farm_id: Some("FARM-001".to_string()),
                flock_period: Some("35-42".to_string()),
                live_weight_kg: 1400.0,
                feed_consumption_kg: 1800.0,
                water_l: 3600.0,
                electricity_kwh: 80.0,
                lpg_kg: 15.0,
                litter_kg: 200.0,
                waste_treatment: Some(WasteTreatment::Stored),
            }),
            processing: Some(ProcessingInput {
                rpa_id: Some("RPA-001".to_string()),
                date: Some("2024-11-30".to_string()),
                shift: Some("Shift 1".to_string()),
                frozen_output_kg: 1000.0,
                electricity_kwh: 150.0,
                cooling_pct: 80.0,
                diesel_l: 10.0,
                nh3_leak_kg: 0.5,
                ldpe_kg: 5.0,
                pp_kg: 8.0,
            }),
        }
    }

    /// Subsystems that have not been entered yet
    pub fn missing_sections(&self) -> Vec<Subsystem> {
        let mut missing = Vec::new();
        if self.feed.is_none() {
            missing.push(Subsystem::Feed);
        }
        if self.broiler.is_none() {
            missing.push(Subsystem::Broiler);
        }
        if self.processing.is_none() {
            missing.push(Subsystem::Processing);
        }
        missing
    }

    /// All three sections present
    pub fn is_complete(&self) -> bool {
        self.missing_sections().is_empty()
    }

    /// Fail with [`LcaError::IncompleteBatch`] unless every section is present
    pub fn require_complete(&self) -> Result<(), LcaError> {
        let missing = self.missing_sections();
        if missing.is_empty() {
            return Ok(());
        }
        Err(LcaError::IncompleteBatch {
            batch_id: self.batch_id.clone(),
            missing: missing
                .iter()
                .map(|s| section_name(*s).to_string())
                .collect(),
        })
    }

    /// Frozen output in kg, when recorded
    pub fn functional_output_kg(&self) -> Option<f64> {
        self.processing
            .as_ref()
            .map(|p| p.frozen_output_kg)
            .filter(|kg| kg.is_finite() && *kg > 0.0)
    }

    /// Line items per subsystem, normalised to 1 kg of frozen carcass
    ///
    /// Without a recorded output the quantities are taken as already
    /// expressed per functional unit.
    pub fn subtotals(&self, factors: &EmissionFactors) -> Result<Vec<SubsystemSubtotal>, LcaError> {
        self.require_complete()?;

        let divisor = match self.functional_output_kg() {
            Some(kg) => kg,
            None => {
                log::warn!(
                    "Batch {}: no frozen output recorded, quantities used as per-kg values",
                    self.batch_id
                );
                1.0
            }
        };

        let mut subtotals = Vec::with_capacity(3);
        if let Some(feed) = &self.feed {
            subtotals.push(normalised(Subsystem::Feed, feed.line_items(factors), divisor));
        }
        if let Some(broiler) = &self.broiler {
            subtotals.push(normalised(Subsystem::Broiler, broiler.line_items(factors), divisor));
        }
        if let Some(processing) = &self.processing {
            subtotals.push(normalised(
                Subsystem::Processing,
                processing.line_items(factors),
                divisor,
            ));
        }
        Ok(subtotals)
    }

    /// Aggregate the batch into a classified footprint
    pub fn calculate(
        &self,
        factors: &EmissionFactors,
        aggregator: &EmissionsAggregator,
    ) -> Result<FootprintResult, LcaError> {
        Ok(aggregator.aggregate(self.subtotals(factors)?))
    }
}

/// Section name as written in batch files
pub fn section_name(subsystem: Subsystem) -> &'static str {
    match subsystem {
        Subsystem::Feed => "feed",
        Subsystem::Broiler => "broiler",
        Subsystem::Processing => "processing",
    }
}

fn normalised(
    subsystem: Subsystem,
    items: Vec<crate::lca::ActivityLineItem>,
    divisor: f64,
) -> SubsystemSubtotal {
    SubsystemSubtotal::new(
        subsystem,
        items.iter().map(|item| item.scaled(divisor)).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lca::FootprintStatus;

    #[test]
    fn test_reference_batch_is_complete() {
        let batch = BatchInventory::reference();
        assert!(batch.is_complete());
        assert_eq!(batch.functional_output_kg(), Some(1000.0));
    }

    #[test]
    fn test_reference_batch_footprint() {
        let result = BatchInventory::reference()
            .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
            .unwrap();

        // Feed: (1100 + 240 + 60 + 40 + 70 + 127.5 + 100 + 53.6) / 1000
        assert!((result.subtotal_of(Subsystem::Feed) - 1.7911).abs() < 1e-9);
        // Broiler: (68 + 45 + 700 + 70) / 1000
        assert!((result.subtotal_of(Subsystem::Broiler) - 0.883).abs() < 1e-9);
        // Processing: (102 + 25.5 + 26.8 + 0 + 10 + 14.4) / 1000
        assert!((result.subtotal_of(Subsystem::Processing) - 0.1787).abs() < 1e-9);
        assert!((result.total() - 2.8528).abs() < 1e-9);
        assert_eq!(result.status(), FootprintStatus::Low);
    }

    #[test]
    fn test_incomplete_batch_names_missing_sections() {
        let mut batch = BatchInventory::reference();
        batch.processing = None;

        let err = batch
            .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
            .unwrap_err();
        match err {
            LcaError::IncompleteBatch { batch_id, missing } => {
                assert_eq!(batch_id, "BATCH-2024-156");
                assert_eq!(missing, vec!["processing".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_output_uses_raw_quantities() {
        let mut batch = BatchInventory::reference();
        if let Some(p) = batch.processing.as_mut() {
            p.frozen_output_kg = 0.0;
        }
        assert_eq!(batch.functional_output_kg(), None);

        let subtotals = batch.subtotals(&EmissionFactors::default()).unwrap();
        assert!((subtotals[0].items[0].quantity - 500.0).abs() < 1e-12);
    }

    #[test]
    fn test_parses_from_toml() {
        let batch: BatchInventory = toml_edit::de::from_str(
            r#"
batch-id = "BATCH-2024-155"

[feed]
soybean-meal-kg = 400.0

[broiler]
litter-kg = 150.0
"#,
        )
        .unwrap();

        assert_eq!(batch.batch_id, "BATCH-2024-155");
        assert_eq!(batch.feed.as_ref().unwrap().soybean_meal_kg, 400.0);
        assert_eq!(batch.feed.as_ref().unwrap().corn_kg, 0.0);
        assert_eq!(batch.missing_sections(), vec![Subsystem::Processing]);
    }
}
