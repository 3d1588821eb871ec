//! Validation of merged configuration.

use anyhow::Result;

use super::Config;

impl Config {
    /// Reject settings no command can work with.
    ///
    /// A pattern that fails to compile is not rejected here; it surfaces as a
    /// pattern error when addresses are checked.
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.pattern {
            if pattern.trim().is_empty() {
                anyhow::bail!("pattern must not be empty");
            }
        }

        if let Some(blank) = self.emails.iter().position(|e| e.trim().is_empty()) {
            anyhow::bail!("emails[{}] is blank", blank);
        }

        Ok(())
    }
}
