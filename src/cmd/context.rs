//! Shared setup for command handlers

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader};
use crate::inventory::{BatchInventory, EmissionFactors, InventoryLoader};
use crate::lca::{EmissionsAggregator, ScenarioProjector};

/// Configuration resolved for one command invocation
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded `.broiler-lca.toml` (defaults when absent)
    pub config: ConfigFile,
    /// Factor table with config overrides applied
    pub factors: EmissionFactors,
}

impl CommandContext {
    /// Load configuration from `root`
    pub fn load(root: &Path) -> Result<Self> {
        let config = ConfigLoader::load(root)?;
        Ok(Self::from_config(config))
    }

    /// Build a context from an already loaded configuration
    pub fn from_config(config: ConfigFile) -> Self {
        let factors = EmissionFactors::with_overrides(&config.factors);
        Self { config, factors }
    }

    /// Aggregator classifying against the configured thresholds
    pub fn aggregator(&self) -> EmissionsAggregator {
        EmissionsAggregator::new(self.config.thresholds)
    }

    /// Projector over the configured scenario baseline
    pub fn projector(&self) -> ScenarioProjector {
        ScenarioProjector::new(
            self.config.scenario_baseline,
            self.config.efficacy,
            self.config.thresholds,
        )
    }
}

/// Load `path`, or the reference batch when no path is given
pub fn load_batch(path: Option<&Path>) -> Result<BatchInventory> {
    match path {
        Some(path) => InventoryLoader::load(path)
            .with_context(|| format!("Failed to load batch {}", path.display())),
        None => {
            log::info!("No batch file given, using reference batch BATCH-2024-156");
            Ok(BatchInventory::reference())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FactorOverrides;
    use crate::error::{ErrorFormatter, LcaError};

    #[test]
    fn test_context_applies_factor_overrides() {
        let config = ConfigFile {
            factors: FactorOverrides {
                soybean_meal: Some(1.5),
                ..Default::default()
            },
            ..Default::default()
        };
        let ctx = CommandContext::from_config(config);
        assert_eq!(ctx.factors.soybean_meal, 1.5);
        assert_eq!(ctx.factors.corn, 0.8);
    }

    #[test]
    fn test_load_batch_without_path_is_reference() {
        let batch = load_batch(None).unwrap();
        assert_eq!(batch.batch_id, "BATCH-2024-156");
    }

    #[test]
    fn test_load_batch_missing_file_keeps_exit_code() {
        let err = load_batch(Some(Path::new("/nonexistent/batch.toml"))).unwrap_err();
        assert!(err.chain().any(|e| e.downcast_ref::<LcaError>().is_some()));
        assert_eq!(ErrorFormatter::exit_code(&err), 66);
    }
}
