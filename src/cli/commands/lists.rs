//! Lists command implementation
//!
//! Fetches a board's lists and prints one `id,name` CSV row per list to
//! stdout.

use anyhow::Result;

use crate::cli::{Output, TrelloAuthArgs};
use crate::config::BoxsizerConfig;
use crate::records;
use crate::trello::TrelloClient;

/// Execute the lists command
pub async fn execute(
    auth: TrelloAuthArgs,
    board_id: &str,
    config: &BoxsizerConfig,
    output: &Output,
) -> Result<()> {
    let app_key = auth.key.resolve(config)?;
    let token = auth.resolve_token(config)?;
    let client = TrelloClient::new(app_key, Some(token)).with_base_url(&config.trello.base_url);

    let lists = client.board_lists(board_id).await?;
    output.verbose(&format!("Board {} has {} lists", board_id, lists.len()));

    let rows: Vec<Vec<String>> = lists
        .into_iter()
        .map(|list| vec![list.id, list.name])
        .collect();
    print!("{}", records::to_csv(&rows)?);

    Ok(())
}
