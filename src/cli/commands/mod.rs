//! Command implementations for the Boxsizer CLI
//!
//! This module contains the actual implementations for each CLI command.
//! Each command is organized into its own module for better maintainability.

pub mod cards;
pub mod lists;
pub mod load_list;
pub mod load_sheet;
pub mod token_request;
pub mod version;
