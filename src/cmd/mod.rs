//! Command handlers for the sample-checks CLI

use anyhow::{Context, Result};

use sample_checks::config::Config;

pub mod emails;
pub mod entries;
pub mod util;

/// Load the merged global and project configuration.
pub fn load_config() -> Result<Config> {
    Config::load().context("Failed to load configuration")
}
