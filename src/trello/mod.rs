//! Trello API integration
//!
//! A thin client over Trello's REST API plus the list/card join that turns a
//! board into flat CSV rows.

mod client;
mod types;

pub use client::TrelloClient;
pub use types::{TrelloCard, TrelloList, join_cards_with_lists};
