//! Utility commands (config, version, completion).

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;
use sample_checks::ui;

/// Print the effective configuration as YAML
pub fn cmd_config() -> Result<()> {
    let config = super::load_config()?;
    ui::hint("# Effective configuration (defaults < global < project)");
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
    print!("{}", yaml);
    Ok(())
}

/// Show version information
pub fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("sample-checks {}", VERSION);

    if verbose {
        println!("commit: {}", env!("SAMPLE_CHECKS_GIT_SHA"));
        println!("built: {}", env!("SAMPLE_CHECKS_BUILD_DATE"));
    }

    Ok(())
}

/// Generate shell completion script
pub fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "sample-checks", &mut io::stdout());
    Ok(())
}
