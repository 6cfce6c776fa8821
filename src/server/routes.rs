// src/server/routes.rs
//! Axum router configuration for the larder server

use crate::server::SharedState;
use crate::server::handlers::recipes;
use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    // CORS configuration - permissive, the API is read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new();

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Paginated listing
        .route("/recipes", get(recipes::list_recipes))
        // Operator-based search, unpaginated
        .route("/recipes/search", get(recipes::search_recipes))
        .layer(compression)
        .with_state(state)
        .layer(cors)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
