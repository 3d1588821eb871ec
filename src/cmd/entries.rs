//! `sample-checks entries`: run the query and print what it found.

use anyhow::Result;

use sample_checks::config::OutputFormat;
use sample_checks::query::{self, QueryResult};

/// Render a successful result the way the text output shows it.
fn render_text(result: &QueryResult) -> String {
    format!("result={}, err=<nil>", result)
}

pub fn cmd_entries(json: bool) -> Result<()> {
    let config = super::load_config()?;

    // Any error here is the "no entries found" sentinel; it ends the run.
    let result = query::result_entries()?;

    if json || config.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_text(&result));
    }

    Ok(())
}
