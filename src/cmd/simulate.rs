//! Simulate command implementation
//!
//! Handles `broiler-lca simulate`, which projects a mitigation scenario over
//! the configured baseline.

use anyhow::Result;
use std::env;

use super::context::CommandContext;
use crate::error::LcaError;
use crate::lca::MitigationScenario;
use crate::report::display::print_scenario;

/// Project the footprint after applying the three mitigation levers
///
/// Lever values outside their ranges are clamped. With `check`, a scenario
/// that misses the target fails the command.
///
/// # Examples
///
/// ```no_run
/// use broiler_lca::cmd::simulate::cmd_simulate;
///
/// // Half the soybean meal replaced, all litter to biogas
/// cmd_simulate(50.0, 100.0, 0.0, false, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_simulate(
    soybean: f64,
    biogas: f64,
    cooling: f64,
    json_output: bool,
    check: bool,
) -> Result<()> {
    let ctx = CommandContext::load(&env::current_dir()?)?;
    let scenario = MitigationScenario::new(soybean, biogas, cooling);

    if scenario.soybean_substitution_pct() != soybean
        || scenario.litter_biogas_pct() != biogas
        || scenario.cooling_reduction_pct() != cooling
    {
        log::warn!(
            "Lever values clamped to soybean {}%, biogas {}%, cooling {}%",
            scenario.soybean_substitution_pct(),
            scenario.litter_biogas_pct(),
            scenario.cooling_reduction_pct()
        );
    }

    let result = ctx.projector().project(&scenario);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_scenario(&result);
    }

    if check {
        if let Some(gap) = result.gap_to_target {
            return Err(LcaError::TargetMissed {
                total: result.total,
                target: result.target,
                gap,
            }
            .into());
        }
    }

    Ok(())
}
