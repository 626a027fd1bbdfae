use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use boxsizer::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so CSV output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boxsizer=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run().await
}
