//! Guidepost CLI — the main entry point.
//!
//! Commands:
//! - `serve`      — Start the HTTP chat gateway
//! - `categories` — List registered guidance categories
//! - `doctor`     — Diagnose configuration health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "guidepost",
    about = "Guidepost — category-scoped guidance chat service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List registered categories for a guidance type
    Categories {
        /// Guidance type ("mental" or "technical"); omit to list both
        guidance_type: Option<String>,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose configuration health
    Doctor,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Categories {
            guidance_type,
            json,
        } => commands::categories::run(guidance_type, json)?,
        Commands::Doctor => commands::doctor::run()?,
    }

    Ok(())
}
