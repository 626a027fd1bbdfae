//! Load-list command implementation
//!
//! Creates a new Trello card in the given list for each line of the input
//! file, echoing each line as it is loaded.

use anyhow::Result;

use crate::cli::{Output, TrelloAuthArgs};
use crate::config::BoxsizerConfig;
use crate::credentials;
use crate::trello::TrelloClient;

/// Execute the load-list command
pub async fn execute(
    auth: TrelloAuthArgs,
    list_id: &str,
    file: &str,
    config: &BoxsizerConfig,
    output: &Output,
) -> Result<()> {
    let app_key = auth.key.resolve(config)?;
    let token = auth.resolve_token(config)?;
    let client = TrelloClient::new(app_key, Some(token)).with_base_url(&config.trello.base_url);

    let lines = credentials::read_lines(file)?;
    if lines.is_empty() {
        output.warning(&format!("{} is empty, no cards to create", file));
        return Ok(());
    }

    output.step(&format!(
        "Creating {} cards in list {}",
        lines.len(),
        list_id
    ));
    for line in &lines {
        println!("{line}");
        client.create_card(list_id, line).await?;
    }

    output.success(&format!("Created {} cards", lines.len()));
    Ok(())
}
