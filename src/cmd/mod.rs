//! Command handlers for broiler-lca CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod calculate;
pub mod completions;
pub mod context;
pub mod hotspots;
pub mod init;
pub mod label;
pub mod simulate;

// Re-export command functions for convenient access
pub use calculate::{cmd_calculate, BatchFilter};
pub use completions::cmd_completions;
pub use hotspots::cmd_hotspots;
pub use init::cmd_init;
pub use label::cmd_label;
pub use simulate::cmd_simulate;
