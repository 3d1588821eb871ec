//! `sample-checks emails`: validate addresses against the email pattern.

use anyhow::Result;
use serde::Serialize;

use sample_checks::config::OutputFormat;
use sample_checks::email;
use sample_checks::ui::{self, colors};

/// Outcome of one `emails` run
#[derive(Debug, Serialize)]
pub struct EmailReport {
    pub valid: bool,
    /// Addresses looked at before stopping
    pub checked: usize,
    pub first_invalid: Option<String>,
}

impl EmailReport {
    pub fn build(pattern: &str, addresses: &[String]) -> Result<Self> {
        let report = match email::first_mismatch(pattern, addresses)? {
            Some(index) => Self {
                valid: false,
                checked: index + 1,
                first_invalid: Some(addresses[index].clone()),
            },
            None => Self {
                valid: true,
                checked: addresses.len(),
                first_invalid: None,
            },
        };
        Ok(report)
    }
}

pub fn cmd_emails(addresses: Vec<String>, json: bool) -> Result<()> {
    let config = super::load_config()?;

    let addresses = if addresses.is_empty() {
        ui::hint(&format!(
            "No addresses given, checking {} configured address(es)",
            config.emails.len()
        ));
        config.emails.clone()
    } else {
        addresses
    };

    let report = EmailReport::build(config.email_pattern(), &addresses)?;

    if json || config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", ui::verdict(report.valid));
    if let Some(address) = &report.first_invalid {
        if !ui::is_quiet() {
            eprintln!(
                "{} {}",
                colors::warning("First invalid address:"),
                colors::identifier(address)
            );
        }
    }

    Ok(())
}
