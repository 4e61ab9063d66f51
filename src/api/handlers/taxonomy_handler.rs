//! Taxonomy handlers - derived category and tag sets.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::errors::AppResult;

/// Create taxonomy routes
pub fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/tags", get(list_tags))
}

/// List all categories in use
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Taxonomy",
    responses(
        (status = 200, description = "Unique category values", body = [String])
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let categories = state.article_service.categories().await?;
    Ok(Json(categories))
}

/// List all tag labels in use
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "Taxonomy",
    responses(
        (status = 200, description = "Unique tag labels", body = [String])
    )
)]
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    let tags = state.article_service.tags().await?;
    Ok(Json(tags))
}
