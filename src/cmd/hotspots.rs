//! Hotspots command implementation

use anyhow::Result;
use std::env;
use std::path::Path;

use super::context::{load_batch, CommandContext};
use crate::lca::rank_hotspots;
use crate::report::display::print_hotspots;
use crate::report::{HotspotInfo, HotspotsOutput};

/// Rank the emission sources of one batch
///
/// `top` limits the list to the largest sources.
///
/// # Examples
///
/// ```no_run
/// use broiler_lca::cmd::hotspots::cmd_hotspots;
///
/// // Five largest sources of the reference batch
/// cmd_hotspots(None, Some(5), false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_hotspots(file: Option<&Path>, top: Option<usize>, json_output: bool) -> Result<()> {
    let ctx = CommandContext::load(&env::current_dir()?)?;
    let batch = load_batch(file)?;
    let result = batch.calculate(&ctx.factors, &ctx.aggregator())?;

    let mut hotspots = rank_hotspots(&result);
    if let Some(limit) = top {
        hotspots.truncate(limit);
    }

    if json_output {
        let output = HotspotsOutput {
            batch_id: batch.batch_id.clone(),
            total: result.total(),
            hotspots: hotspots.iter().map(HotspotInfo::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_hotspots(&batch.batch_id, result.total(), &hotspots);
    }

    Ok(())
}
