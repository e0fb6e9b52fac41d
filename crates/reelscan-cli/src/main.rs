//! Reelscan CLI - HLS manifest inspection tool
//!
//! Features:
//! - Master manifest analysis (variant ladder extraction)
//! - Relative URI resolution against the manifest location
//! - Text, table, and JSON output

use clap::{Parser, Subcommand};

mod commands;
mod output;

/// Reelscan - HLS stream inspection toolkit
#[derive(Parser)]
#[command(name = "reelscan")]
#[command(version)]
#[command(about = "Inspect HLS master manifests and their variant ladders", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, table, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the variant streams advertised by a master manifest
    Variants {
        /// URL of the manifest
        manifest: String,

        /// Request timeout in seconds
        #[arg(short, long, default_value = "10")]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(level).init();

    match cli.command {
        Commands::Variants { manifest, timeout } => {
            commands::variants(&manifest, timeout, &cli.format).await?;
        }
    }

    Ok(())
}
