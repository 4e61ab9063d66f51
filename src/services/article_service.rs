//! Article service - lifecycle and consistency rules for articles.
//!
//! Owns the write-side invariants: required-field validation, creation
//! defaults, merge semantics for partial updates, slug uniqueness, and the
//! unconditional `last_modified` refresh.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{Article, ArticleQuery, CreateArticle, UpdateArticle};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ArticleRepository;

/// Article service trait for dependency injection.
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Find articles matching the query, newest first, capped at `limit`
    async fn list(&self, query: ArticleQuery, limit: u64) -> AppResult<Vec<Article>>;

    /// Get a single article by identifier
    async fn get(&self, id: Uuid) -> AppResult<Article>;

    /// Create an article, filling defaults for omitted fields
    async fn create(&self, fields: CreateArticle) -> AppResult<Article>;

    /// Merge supplied fields into an existing article
    async fn update(&self, id: Uuid, fields: UpdateArticle) -> AppResult<Article>;

    /// Hard-delete an article
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// All unique category values
    async fn categories(&self) -> AppResult<Vec<String>>;

    /// All unique tag labels
    async fn tags(&self) -> AppResult<Vec<String>>;
}

/// Concrete implementation of [`ArticleService`] over an article repository.
pub struct ArticleManager {
    repo: Arc<dyn ArticleRepository>,
}

impl ArticleManager {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self { repo }
    }

    /// Reject a slug already owned by a different article. `None` slugs
    /// never conflict.
    async fn ensure_slug_available(
        &self,
        slug: Option<&str>,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        let Some(slug) = slug else {
            return Ok(());
        };

        match self.repo.find_by_slug(slug.to_string()).await? {
            Some(existing) if Some(existing.id) != exclude => Err(AppError::conflict("slug")),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ArticleService for ArticleManager {
    async fn list(&self, query: ArticleQuery, limit: u64) -> AppResult<Vec<Article>> {
        self.repo.find(query, limit).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Article> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, fields: CreateArticle) -> AppResult<Article> {
        fields.validate()?;

        let article = Article::new(fields);
        self.ensure_slug_available(article.slug.as_deref(), None)
            .await?;

        self.repo.insert(article).await
    }

    async fn update(&self, id: Uuid, fields: UpdateArticle) -> AppResult<Article> {
        fields.validate()?;

        let mut article = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        article.apply(fields);

        self.ensure_slug_available(article.slug.as_deref(), Some(id))
            .await?;

        self.repo.update(article).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn categories(&self) -> AppResult<Vec<String>> {
        self.repo.distinct_categories().await
    }

    async fn tags(&self) -> AppResult<Vec<String>> {
        self.repo.distinct_tags().await
    }
}
