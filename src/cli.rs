// src/cli.rs
//! CLI definitions for larder
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

pub const DEFAULT_DB_PATH: &str = "/var/lib/larder/larder.db";

#[derive(Parser)]
#[command(name = "larder")]
#[command(author = "Larder Project")]
#[command(version)]
#[command(about = "Read-only HTTP API over a recipe catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the recipe database
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Load recipes from a JSON file into the database
    Load {
        /// Path to the JSON file containing recipes
        json_file: String,

        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Start the HTTP API server
    Serve {
        /// Address to bind to
        #[arg(short, long, default_value = "0.0.0.0:8080")]
        bind: String,

        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },
}
