//! Configuration management for Boxsizer
//!
//! Built-in defaults merged with an optional `boxsizer.toml` in the working
//! directory (or the file named by `--config`), with `BOXSIZER_`-prefixed
//! environment variables taking the highest priority.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Main configuration structure for Boxsizer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoxsizerConfig {
    /// Trello API configuration
    #[serde(default)]
    pub trello: TrelloConfig,

    /// Google Sheets configuration
    #[serde(default)]
    pub sheets: SheetsConfig,
}

/// Trello-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrelloConfig {
    /// File in which the Trello application key is stored
    pub app_key_file: String,

    /// File in which the Trello access token is stored
    pub token_file: String,

    /// Trello API base URL
    pub base_url: String,
}

/// Google Sheets-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Service-account JSON key file
    pub credentials_file: String,

    /// Sheets API base URL
    pub base_url: String,
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self {
            app_key_file: "APP_KEY".to_string(),
            token_file: "ACCESS_TOKEN".to_string(),
            base_url: "https://api.trello.com".to_string(),
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            credentials_file: "GOOGLE_CREDENTIALS".to_string(),
            base_url: "https://sheets.googleapis.com".to_string(),
        }
    }
}

impl BoxsizerConfig {
    /// Load configuration, optionally from a custom file path
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            figment = figment.merge(Toml::file("boxsizer.toml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("BOXSIZER_").split("__"));

        figment.extract().context("Failed to load configuration")
    }
}

#[cfg(test)]
mod tests;
