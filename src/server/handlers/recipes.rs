// src/server/handlers/recipes.rs
//! Recipe listing and search handlers for the larder server

use crate::db::Recipe;
use crate::search::{SearchFilter, SearchParams};
use crate::server::SharedState;
use crate::server::handlers::{ApiError, ApiResult};
use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default page size for the listing endpoint
const DEFAULT_PAGE_SIZE: i64 = 10;
/// Requests for a larger page size are capped, not rejected
const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for the listing endpoint
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
}

/// Response for the listing endpoint
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub page: i64,
    pub limit: i64,
    /// Count across all pages, not just this one
    pub total: i64,
    pub data: Vec<Recipe>,
}

/// Response for the search endpoint: every match, unpaginated
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub data: Vec<Recipe>,
}

/// List recipes, paginated, in the default ordering
///
/// GET /recipes?page=<n>&limit=<n>
pub async fn list_recipes(
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = match query.limit {
        Some(limit) if limit > 0 => limit.min(MAX_PAGE_SIZE),
        _ => DEFAULT_PAGE_SIZE,
    };
    // Saturate so an absurdly large page stays a valid empty-page request
    let offset = page.saturating_sub(1).saturating_mul(limit);

    debug!("Listing recipes: page={}, limit={}", page, limit);

    let (total, recipes) = tokio::task::spawn_blocking(move || -> crate::Result<_> {
        let conn = state.open_db()?;
        let total = Recipe::count_all(&conn)?;
        let recipes = Recipe::list_page(&conn, limit, offset)?;
        Ok((total, recipes))
    })
    .await
    .map_err(|e| ApiError(crate::Error::Other(format!("Task join error: {}", e))))??;

    Ok(Json(ListResponse {
        page,
        limit,
        total,
        data: recipes,
    }))
}

/// Search recipes with per-field filters combined with AND
///
/// GET /recipes/search?title=&cuisine=&calories=&total_time=&rating=
pub async fn search_recipes(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchResponse>> {
    let filter = SearchFilter::from_params(&params);
    debug!("Searching recipes with {} filter(s)", filter.len());

    let recipes = tokio::task::spawn_blocking(move || -> crate::Result<_> {
        let conn = state.open_db()?;
        Recipe::search(&conn, &filter)
    })
    .await
    .map_err(|e| ApiError(crate::Error::Other(format!("Task join error: {}", e))))??;

    Ok(Json(SearchResponse { data: recipes }))
}
