//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{article_handler, taxonomy_handler};
use crate::domain::{Article, ArticleStatus, CreateArticle, UpdateArticle};

/// OpenAPI documentation for the Article API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Article API",
        version = "0.1.0",
        description = "Content-management backend for article publishing",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    paths(
        // Article endpoints
        article_handler::list_articles,
        article_handler::get_article,
        article_handler::create_article,
        article_handler::update_article,
        article_handler::delete_article,
        // Taxonomy endpoints
        taxonomy_handler::list_categories,
        taxonomy_handler::list_tags,
    ),
    components(
        schemas(
            Article,
            ArticleStatus,
            CreateArticle,
            UpdateArticle,
            article_handler::DeleteResponse,
        )
    ),
    tags(
        (name = "Articles", description = "Article query and lifecycle operations"),
        (name = "Taxonomy", description = "Derived category and tag sets")
    )
)]
pub struct ApiDoc;
