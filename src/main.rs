//! CLI entry point for sample-checks.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use sample_checks::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var(ui::QUIET_ENV, "1");
    }

    match cli.command {
        Commands::Emails { addresses, json } => cmd::emails::cmd_emails(addresses, json),
        Commands::Entries { json } => cmd::entries::cmd_entries(json),
        Commands::Config => cmd::util::cmd_config(),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}
