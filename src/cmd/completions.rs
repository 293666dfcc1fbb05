//! Completions command implementation
//!
//! Handles `broiler-lca completions`, which writes a shell completion
//! script to stdout.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts for `cmd`
///
/// # Examples
///
/// ```bash
/// # Bash
/// broiler-lca completions bash > /etc/bash_completion.d/broiler-lca
///
/// # Zsh
/// broiler-lca completions zsh > ~/.zfunc/_broiler-lca
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
