//! Terminal output helpers: quiet mode and the color scheme.

use colored::{ColoredString, Colorize};

/// Environment variable that switches on quiet mode
pub const QUIET_ENV: &str = "SAMPLE_CHECKS_QUIET";

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var(QUIET_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Colored verdict for a validation outcome.
pub fn verdict(valid: bool) -> ColoredString {
    if valid {
        colors::success("true")
    } else {
        colors::error("false")
    }
}

/// Color scheme for command output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (addresses, paths)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Print a dimmed hint line unless quiet mode is on.
pub fn hint(text: &str) {
    if !is_quiet() {
        eprintln!("{}", text.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_is_quiet_reads_env() {
        std::env::set_var(QUIET_ENV, "1");
        assert!(is_quiet());
        std::env::set_var(QUIET_ENV, "TRUE");
        assert!(is_quiet());
        std::env::set_var(QUIET_ENV, "no");
        assert!(!is_quiet());
        std::env::remove_var(QUIET_ENV);
        assert!(!is_quiet());
    }

    #[test]
    fn test_verdict_text() {
        colored::control::set_override(false);
        assert_eq!(verdict(true).to_string(), "true");
        assert_eq!(verdict(false).to_string(), "false");
    }
}
