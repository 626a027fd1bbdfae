//! Token request command implementation
//!
//! Builds the Trello authorize URL a user must visit to grant this
//! application an access token. Only the URL is printed so it can be piped
//! straight into a browser opener.

use anyhow::Result;

use crate::cli::{TokenExpiry, TrelloKeyArgs};
use crate::config::BoxsizerConfig;
use crate::trello::TrelloClient;

/// Execute the token-request command
pub async fn execute(
    key: TrelloKeyArgs,
    expires: TokenExpiry,
    write_access: bool,
    config: &BoxsizerConfig,
) -> Result<()> {
    let app_key = key.resolve(config)?;
    let client = TrelloClient::new(app_key, None).with_base_url(&config.trello.base_url);

    let url = client.token_request_url(crate::PKG_NAME, expires.as_str(), write_access)?;
    println!("{url}");

    Ok(())
}
