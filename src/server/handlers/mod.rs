// src/server/handlers/mod.rs
//! HTTP request handlers for the larder server

pub mod recipes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Error response wrapper: store failures surface as a 500 with a JSON body
pub struct ApiError(pub crate::Error);

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": "internal_error",
            "message": format!("{}", self.0),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
