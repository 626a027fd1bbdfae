//! Sheets v4 values API client
//!
//! Writes rows into a worksheet range in a single request. No batching or
//! retry; the tool only ever moves a handful of rows.

use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::debug;

use super::auth::{self, ServiceAccountKey};
use crate::records::ROW_WIDTH;

/// Authorized client bound to one Sheets API endpoint
pub struct SheetsClient {
    http: Client,
    base_url: String,
    token: String,
}

impl SheetsClient {
    /// Authorize the service account and return a ready client
    pub async fn connect(base_url: &str, key: &ServiceAccountKey) -> Result<Self> {
        let http = Client::new();
        let token = auth::fetch_access_token(&http, key).await?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Overwrite a range with the given rows, returning the updated cell count
    pub async fn update_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: &[Vec<String>],
    ) -> Result<u64> {
        let mut url = Url::parse(&self.base_url).context("Invalid Sheets base URL")?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("Sheets base URL cannot be a base"))?
            .extend(["v4", "spreadsheets", spreadsheet_id, "values", range]);
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        debug!(%url, rows = rows.len(), "updating worksheet range");

        let body = serde_json::json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": rows,
        });

        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .context("Request to Sheets API failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Sheets API error on values update: status {status}: {body}");
        }

        let update: UpdateResponse = response
            .json()
            .await
            .context("Malformed Sheets response from values update")?;
        Ok(update.updated_cells)
    }
}

#[derive(Deserialize)]
struct UpdateResponse {
    #[serde(rename = "updatedCells", default)]
    updated_cells: u64,
}

/// A1 range holding the given number of rows, starting below the header row
///
/// Row 1 is left for headers, so data row i (0-based) lands at spreadsheet
/// row i+2 in columns A and B.
pub fn data_range(worksheet: &str, rows: usize) -> String {
    debug_assert_eq!(ROW_WIDTH, 2, "range columns are hardcoded to A:B");
    format!("'{}'!A2:B{}", worksheet.replace('\'', "''"), rows + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_starts_below_the_header_row() {
        assert_eq!(data_range("Backlog", 1), "'Backlog'!A2:B2");
        assert_eq!(data_range("Backlog", 3), "'Backlog'!A2:B4");
    }

    #[test]
    fn worksheet_names_are_quoted() {
        assert_eq!(data_range("Sprint 12", 2), "'Sprint 12'!A2:B3");
        assert_eq!(data_range("Bob's tasks", 2), "'Bob''s tasks'!A2:B3");
    }

    #[test]
    fn update_response_tolerates_missing_cell_count() {
        let update: UpdateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(update.updated_cells, 0);

        let update: UpdateResponse =
            serde_json::from_str(r#"{"updatedCells": 6, "updatedRows": 3}"#).unwrap();
        assert_eq!(update.updated_cells, 6);
    }
}
