//! Credential and input file helpers
//!
//! Secrets are passed either directly on the command line or through small
//! single-value files kept next to the project. A flag value always wins
//! over the file.

use anyhow::{Context, Result};
use std::path::Path;

/// Return the flag value if present, otherwise the trimmed contents of the file
pub fn value_or_file(value: Option<&str>, path: impl AsRef<Path>, what: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }

    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} from {}", what, path.display()))?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        anyhow::bail!("{} file is empty: {}", what, path.display());
    }

    Ok(trimmed.to_string())
}

/// Read a file as lines, with leading and trailing whitespace stripped
/// from the file as a whole
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(content.trim().lines().map(|line| line.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn flag_value_wins_over_file() {
        let value = value_or_file(Some("from-flag"), "does_not_exist", "token").unwrap();
        assert_eq!(value, "from-flag");
    }

    #[test]
    fn file_contents_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ACCESS_TOKEN");
        fs::write(&path, "  abc123\n").unwrap();

        let value = value_or_file(None, &path, "token").unwrap();
        assert_eq!(value, "abc123");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = value_or_file(None, "missing/APP_KEY", "Trello app key").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Trello app key"));
        assert!(msg.contains("missing/APP_KEY"));
    }

    #[test]
    fn empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("APP_KEY");
        fs::write(&path, "\n\n").unwrap();

        assert!(value_or_file(None, &path, "Trello app key").is_err());
    }

    #[test]
    fn read_lines_strips_outer_whitespace_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        fs::write(&path, "\nfirst card\nsecond card\n\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first card", "second card"]);
    }
}
