//! Catalog route handlers.
//!
//! Thin adapters: fetch-and-normalize lives in the catalog service; these
//! handlers only translate outcomes into HTTP responses. An upstream
//! failure renders as an explicit unavailable state (502), never a crash,
//! and leaves any session cart untouched.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use sapling_core::{CategoryId, ItemKey};

use crate::catalog::{Category, Plant, PlantsOutcome};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the plant list.
#[derive(Debug, Deserialize)]
pub struct PlantsQuery {
    /// Category filter; omitted means the default "all" selection.
    pub category: Option<CategoryId>,
}

/// `GET /api/categories`
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = state.catalog().categories().await?;
    Ok(Json(categories))
}

/// `GET /api/plants?category=ID`
///
/// An empty list means the category has no items; a superseded response
/// answers `204 No Content` so the client keeps the newer render.
pub async fn plants(
    State(state): State<AppState>,
    Query(query): Query<PlantsQuery>,
) -> Result<Response> {
    let category = query.category.unwrap_or_else(CategoryId::all);

    match state.catalog().plants_for(&category).await? {
        PlantsOutcome::Loaded(plants) => Ok(Json(plants).into_response()),
        PlantsOutcome::Superseded => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// `GET /api/plants/{key}`
pub async fn show(
    State(state): State<AppState>,
    Path(key): Path<ItemKey>,
) -> Result<Json<Plant>> {
    state
        .catalog()
        .plant(&key)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Plant not found: {key}")))
}
