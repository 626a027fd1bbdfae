//! Trello board records
//!
//! Only the fields the tool asks Trello for are modelled; everything else in
//! the API responses is ignored.

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;

/// A named column on a Trello board
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrelloList {
    pub id: String,
    pub name: String,
}

/// A single task item belonging to one list
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrelloCard {
    pub id: String,
    pub name: String,
    #[serde(rename = "idList")]
    pub list_id: String,
}

/// Join each card to its parent list name, preserving card order
///
/// Returns `(listName, cardName)` rows ready for CSV output. A card whose
/// `idList` does not appear among the board's lists is an error.
pub fn join_cards_with_lists(
    lists: &[TrelloList],
    cards: &[TrelloCard],
) -> Result<Vec<Vec<String>>> {
    let list_names: HashMap<&str, &str> = lists
        .iter()
        .map(|list| (list.id.as_str(), list.name.as_str()))
        .collect();

    let mut rows = Vec::with_capacity(cards.len());
    for card in cards {
        let list_name = list_names.get(card.list_id.as_str()).ok_or_else(|| {
            anyhow::anyhow!(
                "Card '{}' references unknown list {}",
                card.name,
                card.list_id
            )
        })?;
        rows.push(vec![list_name.to_string(), card.name.clone()]);
    }

    Ok(rows)
}
