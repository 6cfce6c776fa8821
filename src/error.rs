// src/error.rs

//! Error types for the larder crate

use thiserror::Error;

/// Errors that can occur across the larder crate
#[derive(Error, Debug)]
pub enum Error {
    /// Database error
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid JSON in a stored column or an ingestion source file
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for the larder crate
pub type Result<T> = std::result::Result<T, Error>;
