//! Article handlers - query and lifecycle operations.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use crate::domain::{Article, ArticleQuery, CreateArticle, Scope, UpdateArticle};
use crate::errors::{AppError, AppResult};

/// Filter parameters for article listing (all optional)
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListArticlesParams {
    /// Exact category match
    pub category: Option<String>,
    /// Featured flag; the literal "true" means true, anything else false
    pub featured: Option<String>,
    /// Tag membership
    pub tag: Option<String>,
    /// Case-insensitive substring search over title and content
    pub search: Option<String>,
    /// Result-count cap (default 10, max 100)
    pub limit: Option<u64>,
}

/// Delete acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// Create article routes
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
}

/// List published articles matching the supplied filters
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = "Articles",
    params(ListArticlesParams),
    responses(
        (status = 200, description = "Matching published articles, newest first", body = [Article])
    )
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListArticlesParams>,
) -> AppResult<Json<Vec<Article>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
    let query = ArticleQuery::from_params(
        Scope::Published,
        params.category,
        params.featured,
        params.tag,
        params.search,
    );

    let articles = state.article_service.list(query, limit).await?;

    Ok(Json(articles))
}

/// Get a single article by id
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = "Articles",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article", body = Article),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Article>> {
    let id = parse_article_id(&id)?;
    let article = state.article_service.get(id).await?;

    Ok(Json(article))
}

/// Create a new article
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = "Articles",
    request_body = CreateArticle,
    responses(
        (status = 201, description = "Article created", body = Article),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Slug already exists")
    )
)]
pub async fn create_article(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateArticle>,
) -> AppResult<(StatusCode, Json<Article>)> {
    let article = state.article_service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(article)))
}

/// Update an existing article (partial; omitted fields are retained)
#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    tag = "Articles",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = UpdateArticle,
    responses(
        (status = 200, description = "The updated article", body = Article),
        (status = 400, description = "Validation error or malformed identifier"),
        (status = 404, description = "Article not found"),
        (status = 409, description = "Slug already exists")
    )
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateArticle>,
) -> AppResult<Json<Article>> {
    let id = parse_article_id(&id)?;
    let article = state.article_service.update(id, payload).await?;

    Ok(Json(article))
}

/// Delete an article
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = "Articles",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted", body = DeleteResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Article not found")
    )
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let id = parse_article_id(&id)?;
    state.article_service.delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Article deleted successfully".to_string(),
    }))
}

/// Distinguish malformed identifiers from identifiers that resolve to
/// nothing: the former never reach the store.
fn parse_article_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidId)
}
