use broiler_lca::cmd::{self, BatchFilter};
use broiler_lca::lca::FootprintStatus;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Cradle-to-gate carbon footprint calculator for frozen broiler carcass
///
/// broiler-lca aggregates feed, farm and processing activity data into
/// kg CO₂e per kg of product, ranks hotspots and projects mitigation scenarios.
#[derive(Parser)]
#[command(name = "broiler-lca", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate batch footprints (reference batch when no file is given)
    Calculate {
        /// Batch inventory files (TOML)
        #[arg(value_name = "BATCH_FILE")]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Fail when any batch is HIGH
        #[arg(long)]
        check: bool,

        /// Only report batches with this status (low, medium, high)
        #[arg(long)]
        status: Option<FootprintStatus>,

        /// Only report batches from this farm (e.g. FARM-001)
        #[arg(long)]
        farm: Option<String>,

        /// Only report the N highest-emitting batches
        #[arg(short = 't', long)]
        top: Option<usize>,
    },

    /// Project a mitigation scenario
    Simulate {
        /// Soybean meal substitution, percent (0-100)
        #[arg(long, default_value_t = 0.0)]
        soybean: f64,

        /// Litter converted to biogas, percent (0-100)
        #[arg(long, default_value_t = 0.0)]
        biogas: f64,

        /// Cooling energy reduction, percent (0-50)
        #[arg(long, default_value_t = 0.0)]
        cooling: f64,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Fail when the target is not achieved
        #[arg(long)]
        check: bool,
    },

    /// Rank emission hotspots of a batch
    Hotspots {
        /// Batch inventory file (TOML)
        #[arg(value_name = "BATCH_FILE")]
        file: Option<PathBuf>,

        /// Show only the N largest sources
        #[arg(short, long, value_name = "N")]
        top: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview the carbon label of a batch
    Label {
        /// Batch inventory file (TOML)
        #[arg(value_name = "BATCH_FILE")]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default .broiler-lca.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Calculate {
            files,
            json,
            check,
            status,
            farm,
            top,
        }) => {
            let filter = BatchFilter {
                status: *status,
                farm: farm.clone(),
                top: *top,
            };
            cmd::cmd_calculate(files, &filter, *json, *check)
        }
        Some(Commands::Simulate {
            soybean,
            biogas,
            cooling,
            json,
            check,
        }) => cmd::cmd_simulate(*soybean, *biogas, *cooling, *json, *check),
        Some(Commands::Hotspots { file, top, json }) => {
            cmd::cmd_hotspots(file.as_deref(), *top, *json)
        }
        Some(Commands::Label { file, json }) => cmd::cmd_label(file.as_deref(), *json),
        Some(Commands::Init { force }) => cmd::cmd_init(*force),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell, &mut Cli::command());
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("broiler-lca v{}", env!("CARGO_PKG_VERSION"));
            println!("Cradle-to-gate carbon footprint calculator\n");
            println!("Usage: broiler-lca <COMMAND>\n");
            println!("Commands:");
            println!("  calculate  Calculate batch footprints");
            println!("  simulate   Project a mitigation scenario");
            println!("  hotspots   Rank emission hotspots");
            println!("  label      Preview the carbon label");
            println!("  init       Write the default configuration");
            println!("\nRun 'broiler-lca <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use broiler_lca::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
