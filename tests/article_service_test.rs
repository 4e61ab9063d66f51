//! Article service unit tests.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mockall::predicate::eq;
use uuid::Uuid;

use article_api::domain::{Article, ArticleQuery, ArticleStatus, CreateArticle, Scope, UpdateArticle};
use article_api::errors::AppError;
use article_api::infra::MockArticleRepository;
use article_api::services::{ArticleManager, ArticleService};

fn create_fields() -> CreateArticle {
    CreateArticle {
        title: "A".to_string(),
        subtitle: None,
        content: "x".to_string(),
        category: "tech".to_string(),
        read_time: None,
        image_url: None,
        author: None,
        publish_date: None,
        featured: None,
        status: None,
        tags: Some(vec!["go".to_string(), "rust".to_string()]),
        slug: None,
    }
}

fn stored_article(id: Uuid) -> Article {
    let mut article = Article::new(create_fields());
    article.id = id;
    article
}

fn service(repo: MockArticleRepository) -> ArticleManager {
    ArticleManager::new(Arc::new(repo))
}

#[tokio::test]
async fn create_assigns_defaults_and_persists() {
    let mut repo = MockArticleRepository::new();
    repo.expect_insert().returning(|article| Ok(article));

    let created = service(repo).create(create_fields()).await.unwrap();

    assert_eq!(created.status, ArticleStatus::Draft);
    assert!(!created.featured);
    assert_eq!(created.tags, vec!["go", "rust"]);
    assert!(created.slug.is_none());
}

#[tokio::test]
async fn create_with_empty_title_persists_nothing() {
    let mut repo = MockArticleRepository::new();
    repo.expect_insert().times(0);

    let mut fields = create_fields();
    fields.title = String::new();

    let result = service(repo).create(fields).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn create_with_empty_content_persists_nothing() {
    let mut repo = MockArticleRepository::new();
    repo.expect_insert().times(0);

    let mut fields = create_fields();
    fields.content = String::new();

    let result = service(repo).create(fields).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn create_with_taken_slug_is_a_conflict() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_slug()
        .with(eq("why-rust".to_string()))
        .returning(|_| Ok(Some(stored_article(Uuid::new_v4()))));
    repo.expect_insert().times(0);

    let mut fields = create_fields();
    fields.slug = Some("why-rust".to_string());

    let result = service(repo).create(fields).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn create_with_free_slug_succeeds() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_slug().returning(|_| Ok(None));
    repo.expect_insert().returning(|article| Ok(article));

    let mut fields = create_fields();
    fields.slug = Some("why-rust".to_string());

    let created = service(repo).create(fields).await.unwrap();
    assert_eq!(created.slug.as_deref(), Some("why-rust"));
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(repo).get(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn update_merges_fields_and_advances_last_modified() {
    let id = Uuid::new_v4();

    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().with(eq(id)).returning(move |id| {
        let mut article = stored_article(id);
        article.last_modified = Utc::now() - Duration::hours(1);
        Ok(Some(article))
    });
    repo.expect_update().returning(|article| Ok(article));

    let before = Utc::now() - Duration::minutes(30);
    let updated = service(repo)
        .update(
            id,
            UpdateArticle {
                status: Some(ArticleStatus::Published),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, ArticleStatus::Published);
    assert_eq!(updated.title, "A");
    assert_eq!(updated.content, "x");
    assert!(updated.last_modified > before);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_update().times(0);

    let result = service(repo)
        .update(Uuid::new_v4(), UpdateArticle::default())
        .await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn update_keeping_own_slug_is_not_a_conflict() {
    let id = Uuid::new_v4();

    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().with(eq(id)).returning(move |id| {
        let mut article = stored_article(id);
        article.slug = Some("mine".to_string());
        Ok(Some(article))
    });
    repo.expect_find_by_slug().returning(move |_| {
        let mut article = stored_article(id);
        article.slug = Some("mine".to_string());
        Ok(Some(article))
    });
    repo.expect_update().returning(|article| Ok(article));

    let result = service(repo)
        .update(
            id,
            UpdateArticle {
                title: Some("B".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn update_to_foreign_slug_is_a_conflict() {
    let id = Uuid::new_v4();

    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .returning(|id| Ok(Some(stored_article(id))));
    repo.expect_find_by_slug().returning(|_| {
        let mut other = stored_article(Uuid::new_v4());
        other.slug = Some("taken".to_string());
        Ok(Some(other))
    });
    repo.expect_update().times(0);

    let result = service(repo)
        .update(
            id,
            UpdateArticle {
                slug: Some("taken".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn update_with_empty_title_is_rejected_before_lookup() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find_by_id().times(0);
    repo.expect_update().times(0);

    let result = service(repo)
        .update(
            Uuid::new_v4(),
            UpdateArticle {
                title: Some(String::new()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let mut repo = MockArticleRepository::new();
    repo.expect_delete().returning(|_| Ok(false));

    let result = service(repo).delete(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn delete_acknowledges_removal() {
    let id = Uuid::new_v4();

    let mut repo = MockArticleRepository::new();
    repo.expect_delete().with(eq(id)).returning(|_| Ok(true));

    assert!(service(repo).delete(id).await.is_ok());
}

#[tokio::test]
async fn list_passes_query_and_limit_through() {
    let mut repo = MockArticleRepository::new();
    repo.expect_find()
        .withf(|query, limit| query.scope == Scope::Published && *limit == 10)
        .returning(|_, _| Ok(vec![]));

    let result = service(repo)
        .list(ArticleQuery::new(Scope::Published), 10)
        .await;
    assert_eq!(result.unwrap().len(), 0);
}

#[tokio::test]
async fn distinct_tags_come_back_deduplicated() {
    let mut repo = MockArticleRepository::new();
    repo.expect_distinct_tags()
        .returning(|| Ok(vec!["a".to_string(), "b".to_string(), "c".to_string()]));

    let tags = service(repo).tags().await.unwrap();
    assert_eq!(tags, vec!["a", "b", "c"]);
}
