//! Label command implementation

use anyhow::Result;
use std::env;
use std::path::Path;

use super::context::{load_batch, CommandContext};
use crate::lca::CarbonLabel;
use crate::report::display::print_label;

/// Preview the carbon label of one batch
///
/// # Examples
///
/// ```no_run
/// use broiler_lca::cmd::label::cmd_label;
///
/// cmd_label(None, false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_label(file: Option<&Path>, json_output: bool) -> Result<()> {
    let ctx = CommandContext::load(&env::current_dir()?)?;
    let batch = load_batch(file)?;
    let result = batch.calculate(&ctx.factors, &ctx.aggregator())?;
    let label = CarbonLabel::new(&batch.batch_id, &result);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&label)?);
    } else {
        print_label(&label);
    }

    Ok(())
}
