//! Load-sheet command implementation
//!
//! Parses the input file as two-column CSV rows and writes them into the
//! named worksheet starting at A2, leaving row 1 for headers.

use anyhow::{Context, Result};

use crate::cli::Output;
use crate::config::BoxsizerConfig;
use crate::records;
use crate::sheets::{ServiceAccountKey, SheetsClient, data_range};

/// Execute the load-sheet command
pub async fn execute(
    credentials_file: Option<&str>,
    spreadsheet_id: &str,
    worksheet: &str,
    file: &str,
    config: &BoxsizerConfig,
    output: &Output,
) -> Result<()> {
    let key_path = credentials_file.unwrap_or(&config.sheets.credentials_file);
    let key = ServiceAccountKey::load(key_path)?;

    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read input file: {}", file))?;
    let rows = records::parse_rows(&text)?;
    if rows.is_empty() {
        output.warning(&format!("{} has no rows, nothing to load", file));
        return Ok(());
    }

    output.step(&format!("Authorizing as {}", key.client_email));
    let client = SheetsClient::connect(&config.sheets.base_url, &key).await?;

    let range = data_range(worksheet, rows.len());
    output.info(&format!("Writing {} rows to {}", rows.len(), range));

    let updated = client.update_range(spreadsheet_id, &range, &rows).await?;
    output.success(&format!("Updated {} cells in '{}'", updated, worksheet));

    Ok(())
}
