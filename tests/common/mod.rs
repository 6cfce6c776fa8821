// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

use larder::db::{self, Recipe};
use larder::server::{ServerConfig, ServerState, create_router};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a test database seeded with the two-pie fixture.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_seeded_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    let mut conn = db::open(&db_path).unwrap();

    db::transaction(&mut conn, |tx| {
        let mut apple = Recipe::new("Apple Pie".to_string());
        apple.cuisine = Some("American".to_string());
        apple.rating = Some(4.8);
        apple.total_time = Some(60);
        apple.nutrients = Some(json!({ "calories": "350 kcal" }));
        apple.insert(tx)?;

        let mut cherry = Recipe::new("Cherry Pie".to_string());
        cherry.cuisine = Some("American".to_string());
        cherry.rating = Some(4.2);
        cherry.total_time = Some(90);
        cherry.nutrients = Some(json!({ "calories": "420 kcal" }));
        cherry.insert(tx)?;

        Ok(())
    })
    .unwrap();

    (temp_dir, db_path)
}

/// Build an application router backed by the database at `db_path`
pub fn test_app(db_path: &str) -> axum::Router {
    let config = ServerConfig {
        db_path: db_path.into(),
        ..Default::default()
    };
    create_router(Arc::new(ServerState::new(config)))
}
