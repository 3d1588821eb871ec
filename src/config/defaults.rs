//! Default values for configuration fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Addresses checked when neither the command line nor a config file names any.
pub fn default_emails() -> Vec<String> {
    vec![
        "testuser@gmail.com".to_string(),
        "anotheruser@yahoo.com".to_string(),
        "onemoreuser@hotmail.com".to_string(),
    ]
}
