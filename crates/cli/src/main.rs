//! Orderdesk CLI - run load cycles outside the server.
//!
//! # Usage
//!
//! ```bash
//! # Resolve an identity from a host-context file and print the view model
//! orderdesk load --context fixtures/demo-context.json
//!
//! # Same, against a specific order endpoint and display limit
//! orderdesk load --context ctx.json --api-url http://localhost:8400/orders --limit 5
//! ```
//!
//! # Commands
//!
//! - `load` - Run one load cycle and print the resulting view state as JSON

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "orderdesk")]
#[command(author, version, about = "Orderdesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one load cycle and print the resulting view state as JSON
    Load {
        /// Path to a host-context snapshot JSON file
        #[arg(short, long)]
        context: PathBuf,

        /// Order endpoint URL (overrides ORDERDESK_API_URL)
        #[arg(long)]
        api_url: Option<String>,

        /// Maximum orders to include (overrides ORDERDESK_DISPLAY_LIMIT)
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Load {
            context,
            api_url,
            limit,
        } => commands::load::run(&context, api_url, limit).await?,
    }
    Ok(())
}
