// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { db_path } => commands::cmd_init(&db_path),
        Commands::Load { json_file, db_path } => commands::cmd_load(&json_file, &db_path),
        Commands::Serve { bind, db_path } => commands::cmd_serve(&bind, &db_path).await,
    }
}
