//! Calculate command implementation
//!
//! Handles `broiler-lca calculate`, which aggregates one or more batch files
//! and ranks them by footprint.

use anyhow::Result;
use console::style;
use std::env;
use std::path::PathBuf;

use super::context::{load_batch, CommandContext};
use crate::error::LcaError;
use crate::fmt::CHECKMARK;
use crate::inventory::InventoryValidator;
use crate::lca::{FootprintResult, FootprintStatus};
use crate::report::display::{print_footprint, print_ranking, print_validation};
use crate::report::{CalculateOutput, FootprintInfo};

/// Which ranked batches to report
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchFilter {
    /// Keep only batches with this status
    pub status: Option<FootprintStatus>,
    /// Keep only batches from this farm (case-insensitive)
    pub farm: Option<String>,
    /// Keep at most this many of the highest emitters
    pub top: Option<usize>,
}

impl BatchFilter {
    fn matches(&self, farm_id: Option<&str>, result: &FootprintResult) -> bool {
        let status_ok = self.status.is_none_or(|status| result.status() == status);
        let farm_ok = match &self.farm {
            Some(farm) => farm_id.is_some_and(|id| id.eq_ignore_ascii_case(farm)),
            None => true,
        };
        status_ok && farm_ok
    }

    /// Filter an already ranked list, then cut it to `top`
    fn apply(&self, ranked: Vec<RankedBatch>) -> Vec<(String, FootprintResult)> {
        ranked
            .into_iter()
            .filter(|b| self.matches(b.farm_id.as_deref(), &b.result))
            .take(self.top.unwrap_or(usize::MAX))
            .map(|b| (b.batch_id, b.result))
            .collect()
    }
}

struct RankedBatch {
    batch_id: String,
    farm_id: Option<String>,
    result: FootprintResult,
}

/// Calculate the footprint of each batch
///
/// Without files the reference batch is used. Batches are ranked highest
/// total first and then narrowed by `filter`. With `check`, any batch at or
/// above the baseline threshold fails the command, whether or not the filter
/// keeps it.
///
/// # Examples
///
/// ```no_run
/// use broiler_lca::cmd::calculate::{cmd_calculate, BatchFilter};
///
/// // Reference batch, human-readable
/// cmd_calculate(&[], &BatchFilter::default(), false, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_calculate(
    files: &[PathBuf],
    filter: &BatchFilter,
    json_output: bool,
    check: bool,
) -> Result<()> {
    let ctx = CommandContext::load(&env::current_dir()?)?;
    let aggregator = ctx.aggregator();

    let paths: Vec<Option<&PathBuf>> = if files.is_empty() {
        vec![None]
    } else {
        files.iter().map(Some).collect()
    };

    let mut ranked: Vec<RankedBatch> = Vec::with_capacity(paths.len());
    for path in paths {
        let batch = load_batch(path.map(PathBuf::as_path))?;

        let validation = InventoryValidator::validate(&batch);
        if json_output {
            for issue in &validation.issues {
                log::warn!("{} {}: {}", batch.batch_id, issue.field, issue.message);
            }
        } else {
            print_validation(&batch.batch_id, &validation);
        }

        let result = batch.calculate(&ctx.factors, &aggregator)?;
        ranked.push(RankedBatch {
            farm_id: batch.broiler.as_ref().and_then(|b| b.farm_id.clone()),
            batch_id: batch.batch_id,
            result,
        });
    }

    ranked.sort_by(|a, b| rank_order(&a.result, &b.result));

    let first_high = ranked
        .iter()
        .find(|b| b.result.status() == FootprintStatus::High)
        .map(|b| LcaError::FootprintHigh {
            batch_id: b.batch_id.clone(),
            total: b.result.total(),
            baseline: b.result.thresholds().baseline,
        });

    let results = filter.apply(ranked);
    if results.is_empty() {
        log::info!("No batch matches the filter");
    }

    if json_output {
        let output = CalculateOutput {
            success: first_high.is_none(),
            batches: results
                .iter()
                .map(|(id, r)| FootprintInfo::from_result(id, r))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        if results.is_empty() {
            println!("No batch matches the filter");
        }
        for (batch_id, result) in &results {
            print_footprint(batch_id, result);
        }
        if results.len() > 1 {
            print_ranking(&results);
        }
    }

    if check {
        if let Some(err) = first_high {
            return Err(err.into());
        }
        if !json_output {
            println!(
                "\n{} {} All batches below baseline",
                CHECKMARK,
                style("check passed:").green()
            );
        }
    }

    Ok(())
}

/// Highest total first; a stable sort keeps ties in input order
fn rank_order(a: &FootprintResult, b: &FootprintResult) -> std::cmp::Ordering {
    b.total().total_cmp(&a.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{BatchInventory, EmissionFactors};
    use crate::lca::EmissionsAggregator;

    fn ranked(batch: &BatchInventory) -> RankedBatch {
        let result = batch
            .calculate(&EmissionFactors::default(), &EmissionsAggregator::default())
            .unwrap();
        RankedBatch {
            batch_id: batch.batch_id.clone(),
            farm_id: batch.broiler.as_ref().and_then(|b| b.farm_id.clone()),
            result,
        }
    }

    fn with_soybean(id: &str, farm: &str, soybean_kg: f64) -> BatchInventory {
        let mut batch = BatchInventory::reference();
        batch.batch_id = id.to_string();
        if let Some(feed) = batch.feed.as_mut() {
            feed.soybean_meal_kg = soybean_kg;
        }
        if let Some(broiler) = batch.broiler.as_mut() {
            broiler.farm_id = Some(farm.to_string());
        }
        batch
    }

    fn sorted(mut batches: Vec<RankedBatch>) -> Vec<RankedBatch> {
        batches.sort_by(|a, b| rank_order(&a.result, &b.result));
        batches
    }

    #[test]
    fn test_rank_order_highest_first() {
        let batches = sorted(vec![
            ranked(&BatchInventory::reference()),
            ranked(&with_soybean("BATCH-2024-157", "FARM-001", 900.0)),
        ]);

        assert_eq!(batches[0].batch_id, "BATCH-2024-157");
        assert_eq!(batches[1].batch_id, "BATCH-2024-156");
    }

    #[test]
    fn test_rank_order_keeps_ties_in_input_order() {
        let batches = sorted(vec![
            ranked(&with_soybean("BATCH-2024-001", "FARM-001", 500.0)),
            ranked(&with_soybean("BATCH-2024-002", "FARM-002", 500.0)),
        ]);

        assert_eq!(batches[0].batch_id, "BATCH-2024-001");
        assert_eq!(batches[1].batch_id, "BATCH-2024-002");
    }

    #[test]
    fn test_filter_by_status_and_top() {
        let batches = sorted(vec![
            ranked(&with_soybean("BATCH-2024-001", "FARM-001", 500.0)),
            ranked(&with_soybean("BATCH-2024-002", "FARM-001", 1318.2)),
            ranked(&with_soybean("BATCH-2024-003", "FARM-002", 400.0)),
        ]);

        let low = BatchFilter {
            status: Some(FootprintStatus::Low),
            top: Some(1),
            ..Default::default()
        };
        let kept = low.apply(batches);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "BATCH-2024-001");
    }

    #[test]
    fn test_filter_by_farm_ignores_case() {
        let batches = sorted(vec![
            ranked(&with_soybean("BATCH-2024-001", "FARM-001", 500.0)),
            ranked(&with_soybean("BATCH-2024-002", "FARM-002", 600.0)),
        ]);

        let farm = BatchFilter {
            farm: Some("farm-002".to_string()),
            ..Default::default()
        };
        let kept = farm.apply(batches);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, "BATCH-2024-002");
    }
}
