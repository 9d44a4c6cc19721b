//! Visual search backend server
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vsearch` / `vsearch serve` | Run the HTTP API |
//! | `vsearch clear` | Delete every product and its stored image |

// Force-link vsearch-providers so linkme registrations are included
extern crate vsearch_providers;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

/// Command line interface for the visual search backend
#[derive(Parser, Debug)]
#[command(name = "vsearch")]
#[command(about = "Visual similarity search over a product catalog")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Delete every product in the configured catalog
    Clear,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => vsearch_server::run_server(config_path)
            .await
            .context("visual search server failed"),
        Command::Clear => {
            let removed = vsearch_server::clear_catalog(config_path)
                .await
                .context("failed to clear the catalog")?;
            println!("Removed {removed} products");
            Ok(())
        }
    }
}
