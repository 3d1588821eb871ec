//! CLI argument definitions for sample-checks.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "sample-checks")]
#[command(about = "Email validation and query-result checks", long_about = None)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate email addresses
    ///
    /// Prints `true` when every address matches, `false` at the first one that
    /// does not. With no addresses, the configured list is checked.
    Emails {
        /// Addresses to check
        #[arg(value_name = "ADDRESS")]
        addresses: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the query and print its entries
    Entries {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config,
    /// Show version information
    Version {
        /// Show commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
