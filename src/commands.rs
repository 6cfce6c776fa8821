// src/commands.rs
//! Command handlers for the larder CLI

use anyhow::{Context, Result};
use larder::server::{ServerConfig, run_server};
use larder::{db, ingest};
use std::path::PathBuf;
use tracing::info;

/// Initialize the database at `db_path`
pub fn cmd_init(db_path: &str) -> Result<()> {
    info!("Initializing larder database at: {}", db_path);
    db::init(db_path)?;
    println!("Database initialized successfully at: {}", db_path);
    Ok(())
}

/// Load recipes from `json_file` into the database at `db_path`
pub fn cmd_load(json_file: &str, db_path: &str) -> Result<()> {
    // Make sure the schema exists before loading into a fresh file
    db::init(db_path)?;

    let mut conn = db::open(db_path)?;
    let stats = ingest::load_file(&mut conn, json_file)
        .with_context(|| format!("Failed to load recipes from {}", json_file))?;

    println!(
        "Loaded {} recipes ({} skipped) into {}",
        stats.loaded, stats.skipped, db_path
    );
    Ok(())
}

/// Run the HTTP server
pub async fn cmd_serve(bind: &str, db_path: &str) -> Result<()> {
    let config = ServerConfig {
        bind_addr: bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?,
        db_path: PathBuf::from(db_path),
    };
    run_server(config).await
}
