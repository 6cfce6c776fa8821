// src/server/mod.rs
//! Larder HTTP server - read-only recipe API
//!
//! This module provides an HTTP server that:
//! - Serves the full recipe collection, paginated, with a total count
//! - Serves operator-based multi-field search over the collection
//!
//! Every request is an independent read: handlers open a fresh SQLite
//! connection on the blocking pool and hold no cross-request state.

mod handlers;
mod routes;

pub use routes::create_router;

use anyhow::Result;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the recipe database
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".parse().unwrap(),
            db_path: PathBuf::from("/var/lib/larder/larder.db"),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
}

/// Shared server state handle
pub type SharedState = Arc<ServerState>;

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Open a fresh read connection for one request
    pub fn open_db(&self) -> crate::Result<Connection> {
        crate::db::open(&self.config.db_path)
    }
}

/// Start the larder server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting larder server on {}", config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);

    let state = Arc::new(ServerState::new(config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Larder is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
