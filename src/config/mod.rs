//! Configuration for the sample-checks CLI.
//!
//! Config files are markdown with YAML frontmatter. The global file lives at
//! `~/.config/sample-checks/config.md`, the project file at
//! `.sample-checks.md` in the working directory. Project values override
//! global ones field by field; anything unset falls back to the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Project config file, relative to the working directory
pub const PROJECT_CONFIG_FILE: &str = ".sample-checks.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Addresses checked by `sample-checks emails` when none are given
    pub emails: Vec<String>,
    /// Output format for command results
    pub format: OutputFormat,
    /// Replacement for the built-in email pattern
    pub pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emails: default_emails(),
            format: OutputFormat::default(),
            pattern: None,
        }
    }
}

impl Config {
    /// Load configuration from the global and project config files.
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG_FILE),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let partial = PartialConfig::load_from(path)?;
        let config = PartialConfig::default().merge_with(partial);
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config = PartialConfig::default().merge_with(PartialConfig::parse(content)?);
        config.validate()?;
        Ok(config)
    }

    /// Load merged configuration. Missing files are skipped.
    /// Merge order (later overrides earlier):
    /// 1. Global config
    /// 2. Project config
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global_config.merge_with(project_config);
        config.validate()?;
        Ok(config)
    }

    /// Pattern used for email validation, honoring the override.
    pub fn email_pattern(&self) -> &str {
        self.pattern
            .as_deref()
            .unwrap_or(crate::email::EMAIL_PATTERN)
    }
}

/// Returns the path to the global config file at ~/.config/sample-checks/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/sample-checks/config.md"))
}

/// Config as written in a single file, before defaults are applied
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    emails: Option<Vec<String>>,
    format: Option<OutputFormat>,
    pattern: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(frontmatter).context("Failed to parse config frontmatter")
    }

    /// Overlay `other` on top of `self`, then fill the gaps with defaults.
    fn merge_with(self, other: PartialConfig) -> Config {
        Config {
            emails: other.emails.or(self.emails).unwrap_or_else(default_emails),
            format: other.format.or(self.format).unwrap_or_default(),
            pattern: other.pattern.or(self.pattern),
        }
    }
}

/// Text between the leading `---` and the next `---`.
fn extract_frontmatter(content: &str) -> Option<&str> {
    let rest = content.trim().strip_prefix("---")?;
    let end = rest.find("\n---").map(|i| i + 1).or_else(|| rest.find("---"))?;
    Some(&rest[..end])
}
