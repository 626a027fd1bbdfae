//! CSV row reshaping
//!
//! The tool's interchange format is plain two-column CSV: `listName,cardName`
//! on the way out of Trello, `A,B` cell values on the way into a worksheet.
//! Rows pass through the csv crate so names containing commas or quotes
//! round-trip correctly.

use anyhow::{Context, Result};

/// Number of worksheet columns a row occupies (A and B)
pub const ROW_WIDTH: usize = 2;

/// Render rows as CSV text, one record per line
pub fn to_csv(rows: &[Vec<String>]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row).context("Failed to write CSV row")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Parse CSV text into rows of exactly [`ROW_WIDTH`] fields
///
/// A record with a single field gets an empty second column. Extra fields
/// are folded back into the second column joined by commas, preserving the
/// first-comma split behaviour expected by the sheet loader.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to parse CSV row")?;
        let fields: Vec<&str> = record.iter().collect();

        let mut row = Vec::with_capacity(ROW_WIDTH);
        row.push(fields.first().unwrap_or(&"").to_string());
        row.push(match fields.len() {
            0 | 1 => String::new(),
            2 => fields[1].to_string(),
            _ => fields[1..].join(","),
        });
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_one_record_per_line() {
        let rows = vec![
            vec!["Backlog".to_string(), "Fix the boiler".to_string()],
            vec!["Done".to_string(), "Paint the fence".to_string()],
        ];

        let csv = to_csv(&rows).unwrap();
        assert_eq!(csv, "Backlog,Fix the boiler\nDone,Paint the fence\n");
    }

    #[test]
    fn commas_in_names_are_quoted() {
        let rows = vec![vec![
            "Backlog".to_string(),
            "Paint, then varnish".to_string(),
        ]];

        let csv = to_csv(&rows).unwrap();
        assert_eq!(csv, "Backlog,\"Paint, then varnish\"\n");
    }

    #[test]
    fn parse_pads_single_field_rows() {
        let rows = parse_rows("only-one-field\na,b\n").unwrap();
        assert_eq!(rows[0], vec!["only-one-field", ""]);
        assert_eq!(rows[1], vec!["a", "b"]);
    }

    #[test]
    fn parse_folds_extra_fields_into_second_column() {
        let rows = parse_rows("Backlog,Paint,then varnish\n").unwrap();
        assert_eq!(rows, vec![vec!["Backlog", "Paint,then varnish"]]);
    }

    #[test]
    fn quoted_output_parses_back_to_the_same_row() {
        let original = vec![vec![
            "In Progress".to_string(),
            "Ship \"v2\", finally".to_string(),
        ]];

        let rows = parse_rows(&to_csv(&original).unwrap()).unwrap();
        assert_eq!(rows, original);
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_rows("").unwrap().is_empty());
    }
}
