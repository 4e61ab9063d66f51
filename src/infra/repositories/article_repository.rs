//! Article repository - persistent storage and retrieval of articles.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::article::{ActiveModel, Column, Entity as ArticleEntity};
use crate::config::STATUS_PUBLISHED;
use crate::domain::{Article, ArticleQuery, Scope};
use crate::errors::{AppError, AppResult};

/// Article storage operations.
///
/// `find` returns matches ordered by publish date descending; an empty
/// result is not an error. Write operations are single-statement and
/// therefore per-record atomic; concurrent updates to the same identifier
/// are last-writer-wins.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Find articles matching the query, newest first, capped at `limit`
    async fn find(&self, query: ArticleQuery, limit: u64) -> AppResult<Vec<Article>>;

    /// Find a single article by identifier
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Article>>;

    /// Find a single article by slug
    async fn find_by_slug(&self, slug: String) -> AppResult<Option<Article>>;

    /// Persist a new article
    async fn insert(&self, article: Article) -> AppResult<Article>;

    /// Persist the full state of an existing article
    async fn update(&self, article: Article) -> AppResult<Article>;

    /// Hard-delete an article; returns whether a record was removed
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// All unique category values, lexicographic order
    async fn distinct_categories(&self) -> AppResult<Vec<String>>;

    /// All unique tag labels across all articles, lexicographic order
    async fn distinct_tags(&self) -> AppResult<Vec<String>>;
}

/// SeaORM-backed implementation of [`ArticleRepository`].
pub struct ArticleStore {
    db: DatabaseConnection,
}

impl ArticleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleRepository for ArticleStore {
    async fn find(&self, query: ArticleQuery, limit: u64) -> AppResult<Vec<Article>> {
        let rows = ArticleEntity::find()
            .filter(filter_condition(&query))
            .order_by_desc(Column::PublishDate)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Article>> {
        let row = ArticleEntity::find_by_id(id).one(&self.db).await?;
        Ok(row.map(Article::from))
    }

    async fn find_by_slug(&self, slug: String) -> AppResult<Option<Article>> {
        let row = ArticleEntity::find()
            .filter(Column::Slug.eq(slug))
            .one(&self.db)
            .await?;
        Ok(row.map(Article::from))
    }

    async fn insert(&self, article: Article) -> AppResult<Article> {
        let model = to_active_model(article)
            .insert(&self.db)
            .await
            .map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn update(&self, article: Article) -> AppResult<Article> {
        match to_active_model(article).update(&self.db).await {
            Ok(model) => Ok(model.into()),
            // The row vanished between the caller's lookup and this write
            Err(sea_orm::DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(err) => Err(map_write_err(err)),
        }
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = ArticleEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn distinct_categories(&self) -> AppResult<Vec<String>> {
        let categories: Vec<String> = ArticleEntity::find()
            .select_only()
            .column(Column::Category)
            .distinct()
            .order_by_asc(Column::Category)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(categories)
    }

    async fn distinct_tags(&self) -> AppResult<Vec<String>> {
        let rows: Vec<Vec<String>> = ArticleEntity::find()
            .select_only()
            .column(Column::Tags)
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(dedup_tags(rows))
    }
}

/// Flatten per-article tag arrays into one sorted, deduplicated label set
fn dedup_tags(rows: Vec<Vec<String>>) -> Vec<String> {
    let tags: BTreeSet<String> = rows.into_iter().flatten().collect();
    tags.into_iter().collect()
}

/// Translate the structured predicate into a SQL condition.
///
/// All present filters AND together; the search clause ORs a
/// case-insensitive substring match over title and content.
pub(crate) fn filter_condition(query: &ArticleQuery) -> Condition {
    let mut cond = Condition::all();

    if query.scope == Scope::Published {
        cond = cond.add(Column::Status.eq(STATUS_PUBLISHED));
    }
    if let Some(category) = &query.category {
        cond = cond.add(Column::Category.eq(category.clone()));
    }
    if let Some(featured) = query.featured {
        cond = cond.add(Column::Featured.eq(featured));
    }
    if let Some(tag) = &query.tag {
        cond = cond.add(Expr::col(Column::Tags).contains(vec![tag.clone()]));
    }
    if let Some(search) = &query.search {
        let pattern = format!("%{}%", escape_like(search));
        cond = cond.add(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(pattern.clone()))
                .add(Expr::col(Column::Content).ilike(pattern)),
        );
    }

    cond
}

/// Escape LIKE wildcards so the search term matches as a literal substring
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn to_active_model(article: Article) -> ActiveModel {
    ActiveModel {
        id: Set(article.id),
        title: Set(article.title),
        subtitle: Set(article.subtitle),
        content: Set(article.content),
        category: Set(article.category),
        read_time: Set(article.read_time),
        image_url: Set(article.image_url),
        author: Set(article.author),
        publish_date: Set(article.publish_date),
        featured: Set(article.featured),
        status: Set(article.status.to_string()),
        tags: Set(article.tags),
        slug: Set(article.slug),
        last_modified: Set(article.last_modified),
    }
}

/// Map unique-index violations to slug conflicts; the service pre-checks,
/// this covers the write-write race.
fn map_write_err(err: sea_orm::DbErr) -> AppError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => AppError::conflict("slug"),
        _ => AppError::Database(err),
    }
}
