//! Command-line interface for Boxsizer
//!
//! This module provides the main CLI structure and command handling for
//! Boxsizer. It uses clap for argument parsing and keeps each subcommand's
//! implementation in its own module.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::config::BoxsizerConfig;
use crate::credentials;

mod commands;
mod output;

pub use output::Output;

/// Boxsizer - Trello boards in and out of Google Sheets
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print a Trello URL that grants this application an access token
    TokenRequest {
        #[command(flatten)]
        key: TrelloKeyArgs,

        /// Token lifetime requested from Trello
        #[arg(short = 'x', long, value_enum, default_value = "30days")]
        expires: TokenExpiry,

        /// Always get read access, add this for write access
        #[arg(short, long)]
        write_access: bool,
    },
    /// Print listName,cardName CSV rows for every card on a board
    Cards {
        #[command(flatten)]
        auth: TrelloAuthArgs,

        /// Trello board identifier
        board_id: String,
    },
    /// Print id,name CSV rows for every list on a board
    Lists {
        #[command(flatten)]
        auth: TrelloAuthArgs,

        /// Trello board identifier
        board_id: String,
    },
    /// Create a new card in a list for each line of a file
    LoadList {
        #[command(flatten)]
        auth: TrelloAuthArgs,

        /// Trello list identifier
        list_id: String,

        /// File with one card name per line
        file: String,
    },
    /// Write CSV rows from a file into a Google Sheets worksheet
    LoadSheet {
        /// Service-account JSON key file (default "GOOGLE_CREDENTIALS")
        #[arg(short, long, value_name = "FILE")]
        credentials_file: Option<String>,

        /// Spreadsheet identifier (from the sheet URL)
        spreadsheet_id: String,

        /// Worksheet (tab) name within the spreadsheet
        worksheet: String,

        /// File with comma-separated rows
        file: String,
    },
    /// Show version information
    Version,
}

/// Requested lifetime of a Trello access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenExpiry {
    /// Token expires after thirty days
    #[value(name = "30days")]
    Days30,
    /// Token never expires
    Never,
}

impl TokenExpiry {
    /// Value Trello expects in the authorize URL
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenExpiry::Days30 => "30days",
            TokenExpiry::Never => "never",
        }
    }
}

/// Flags identifying this application to Trello
#[derive(Args)]
pub struct TrelloKeyArgs {
    /// Trello supplied key to identify this application
    #[arg(short = 'k', long)]
    pub app_key: Option<String>,

    /// File in which the application key is stored (default "APP_KEY")
    #[arg(long, value_name = "FILE")]
    pub app_key_file: Option<String>,
}

impl TrelloKeyArgs {
    /// Resolve the application key from the flag or the key file
    pub fn resolve(&self, config: &BoxsizerConfig) -> Result<String> {
        let path = self
            .app_key_file
            .as_deref()
            .unwrap_or(&config.trello.app_key_file);
        credentials::value_or_file(self.app_key.as_deref(), path, "Trello app key")
    }
}

/// Flags identifying this application and the acting Trello user
#[derive(Args)]
pub struct TrelloAuthArgs {
    #[command(flatten)]
    pub key: TrelloKeyArgs,

    /// Access token for the Trello user
    #[arg(short = 't', long)]
    pub token: Option<String>,

    /// File in which the access token is stored (default "ACCESS_TOKEN")
    #[arg(short = 'f', long, value_name = "FILE")]
    pub token_file: Option<String>,
}

impl TrelloAuthArgs {
    /// Resolve the access token from the flag or the token file
    pub fn resolve_token(&self, config: &BoxsizerConfig) -> Result<String> {
        let path = self
            .token_file
            .as_deref()
            .unwrap_or(&config.trello.token_file);
        credentials::value_or_file(self.token.as_deref(), path, "Trello access token")
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        let config = BoxsizerConfig::load(self.config.as_deref())?;

        // Handle the command
        match self.command {
            Some(Commands::TokenRequest {
                key,
                expires,
                write_access,
            }) => commands::token_request::execute(key, expires, write_access, &config).await,
            Some(Commands::Cards { auth, board_id }) => {
                commands::cards::execute(auth, &board_id, &config, &output).await
            }
            Some(Commands::Lists { auth, board_id }) => {
                commands::lists::execute(auth, &board_id, &config, &output).await
            }
            Some(Commands::LoadList {
                auth,
                list_id,
                file,
            }) => commands::load_list::execute(auth, &list_id, &file, &config, &output).await,
            Some(Commands::LoadSheet {
                credentials_file,
                spreadsheet_id,
                worksheet,
                file,
            }) => {
                commands::load_sheet::execute(
                    credentials_file.as_deref(),
                    &spreadsheet_id,
                    &worksheet,
                    &file,
                    &config,
                    &output,
                )
                .await
            }
            Some(Commands::Version) => commands::version::execute(&output).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
