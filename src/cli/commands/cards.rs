//! Cards command implementation
//!
//! Fetches a board's lists and cards, joins each card to its parent list
//! name and prints one `listName,cardName` CSV row per card to stdout.

use anyhow::Result;

use crate::cli::{Output, TrelloAuthArgs};
use crate::config::BoxsizerConfig;
use crate::records;
use crate::trello::{TrelloClient, join_cards_with_lists};

/// Execute the cards command
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
    let cards = client.board_cards(board_id).await?;
    output.verbose(&format!(
        "Board {} has {} lists and {} cards",
        board_id,
        lists.len(),
        cards.len()
    ));

    let rows = join_cards_with_lists(&lists, &cards)?;
    print!("{}", records::to_csv(&rows)?);

    Ok(())
}
