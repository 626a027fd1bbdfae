//! # Boxsizer - Trello boards in and out of Google Sheets
//!
//! A small command-line tool that reads Trello boards as CSV, loads CSV lines
//! back into Trello lists, and pushes CSV rows into Google Sheets worksheets.
//!
//! ## Quick Start
//!
//! ```bash
//! # Ask Trello for an access token
//! boxsizer token-request -k <APP_KEY>
//!
//! # Dump a board as listName,cardName rows
//! boxsizer cards <BOARD_ID> > board.csv
//!
//! # Push the rows into a worksheet
//! boxsizer load-sheet <SPREADSHEET_ID> Backlog board.csv
//! ```

pub mod cli;
pub mod config;
pub mod credentials;
pub mod records;
pub mod sheets;
pub mod trello;

pub use cli::{Cli, Output};
pub use config::BoxsizerConfig;

/// Result type alias for Boxsizer operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
