use std::fs;

use super::*;

#[test]
fn defaults_cover_the_stock_credential_files() {
    // An empty custom config keeps the working directory's boxsizer.toml
    // out of the picture, so only the built-in defaults apply.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    let config = BoxsizerConfig::load(Some(path.to_str().unwrap())).expect("defaults should load");

    assert_eq!(config.trello.app_key_file, "APP_KEY");
    assert_eq!(config.trello.token_file, "ACCESS_TOKEN");
    assert_eq!(config.trello.base_url, "https://api.trello.com");
    assert_eq!(config.sheets.credentials_file, "GOOGLE_CREDENTIALS");
    assert_eq!(config.sheets.base_url, "https://sheets.googleapis.com");
}

#[test]
fn custom_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("boxsizer.toml");
    fs::write(
        &path,
        r#"
[trello]
token_file = "secrets/TOKEN"

[sheets]
base_url = "http://localhost:8080"
"#,
    )
    .unwrap();

    let config = BoxsizerConfig::load(Some(path.to_str().unwrap())).unwrap();

    assert_eq!(config.trello.token_file, "secrets/TOKEN");
    // Untouched keys keep their defaults
    assert_eq!(config.trello.app_key_file, "APP_KEY");
    assert_eq!(config.sheets.base_url, "http://localhost:8080");
}

#[test]
fn missing_custom_config_falls_back_to_defaults() {
    let config = BoxsizerConfig::load(Some("does_not_exist.toml"));
    assert!(config.is_ok(), "missing config file should not be fatal");
}
