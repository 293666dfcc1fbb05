//! Init command implementation
//!
//! Handles `broiler-lca init`, which writes `.broiler-lca.toml` with the
//! reference thresholds, scenario baseline and lever efficacy.

use anyhow::Result;
use console::style;
use std::env;
use std::path::Path;

use crate::config::{ConfigFile, ConfigLoader, CONFIG_FILE_NAME};
use crate::fmt::{CHECKMARK, SPARKLES, WARNING};

/// Write the default configuration to the current directory
///
/// An existing file is left untouched unless `force` is set.
///
/// # Examples
///
/// ```no_run
/// use broiler_lca::cmd::init::cmd_init;
///
/// cmd_init(false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    init_in(&env::current_dir()?, force)
}

fn init_in(root: &Path, force: bool) -> Result<()> {
    if ConfigLoader::exists(root) && !force {
        println!(
            "{} Config file already exists: {}",
            WARNING,
            style(CONFIG_FILE_NAME).cyan()
        );
        println!("   Use --force to overwrite it with the defaults.");
        return Ok(());
    }

    let config = ConfigFile::default();
    ConfigLoader::save(&config, root)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(CONFIG_FILE_NAME).cyan().bold()
    );
    println!(
        "   Target {} | Baseline {} kg CO₂e/kg",
        config.thresholds.target, config.thresholds.baseline
    );
    println!();
    println!("{} Next steps:", SPARKLES);
    println!(
        "   1. Add a [factors] section to override emission factors"
    );
    println!(
        "   2. Run {} on your batch files",
        style("broiler-lca calculate").cyan()
    );
    println!(
        "   3. Run {} to plan reductions",
        style("broiler-lca simulate").cyan()
    );

    Ok(())
}
