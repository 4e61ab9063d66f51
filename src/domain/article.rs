//! Article domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::config::{STATUS_DRAFT, STATUS_PUBLISHED};

/// Editorial status workflow: `draft` <-> `published`, both transitions
/// legal via update, no automated transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    /// Check whether reader-scoped queries may see articles in this status
    pub fn is_published(&self) -> bool {
        matches!(self, ArticleStatus::Published)
    }
}

impl From<&str> for ArticleStatus {
    fn from(s: &str) -> Self {
        match s {
            STATUS_PUBLISHED => ArticleStatus::Published,
            _ => ArticleStatus::Draft,
        }
    }
}

impl std::fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleStatus::Draft => write!(f, "{}", STATUS_DRAFT),
            ArticleStatus::Published => write!(f, "{}", STATUS_PUBLISHED),
        }
    }
}

/// Article domain entity.
///
/// Serialized in camelCase, the wire format the clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Store-assigned identifier, immutable
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    /// Free-form category; the set of categories is derived, not declared
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub featured: bool,
    pub status: ArticleStatus,
    /// Caller-controlled order, duplicates allowed
    pub tags: Vec<String>,
    /// Unique across all articles when present; absent slugs never conflict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub last_modified: DateTime<Utc>,
}

impl Article {
    /// Create a new article from caller-supplied fields, assigning an
    /// identifier and filling defaults for everything omitted.
    pub fn new(fields: CreateArticle) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            subtitle: fields.subtitle,
            content: fields.content,
            category: fields.category,
            read_time: fields.read_time,
            image_url: fields.image_url,
            author: fields.author,
            publish_date: fields.publish_date.unwrap_or(now),
            featured: fields.featured.unwrap_or(false),
            status: fields.status.unwrap_or_default(),
            tags: fields.tags.unwrap_or_default(),
            slug: normalize_slug(fields.slug),
            last_modified: now,
        }
    }

    /// Merge supplied fields into this article; unspecified fields retain
    /// their prior values. `last_modified` is refreshed unconditionally.
    pub fn apply(&mut self, fields: UpdateArticle) {
        if let Some(title) = fields.title {
            self.title = title;
        }
        if let Some(subtitle) = fields.subtitle {
            self.subtitle = Some(subtitle);
        }
        if let Some(content) = fields.content {
            self.content = content;
        }
        if let Some(category) = fields.category {
            self.category = category;
        }
        if let Some(read_time) = fields.read_time {
            self.read_time = Some(read_time);
        }
        if let Some(image_url) = fields.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(author) = fields.author {
            self.author = Some(author);
        }
        if let Some(publish_date) = fields.publish_date {
            self.publish_date = publish_date;
        }
        if let Some(featured) = fields.featured {
            self.featured = featured;
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(tags) = fields.tags {
            self.tags = tags;
        }
        if let Some(slug) = fields.slug {
            self.slug = normalize_slug(Some(slug));
        }
        self.last_modified = Utc::now();
    }

    /// Check whether reader-scoped queries may see this article
    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }
}

/// Empty slugs carry no identity: treat them as absent so that
/// "absent slugs never conflict" holds for callers sending `""`.
fn normalize_slug(slug: Option<String>) -> Option<String> {
    slug.filter(|s| !s.is_empty())
}

/// Article creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
    /// Article headline
    #[validate(length(min = 1, message = "title is required"))]
    #[schema(example = "Why Rust?")]
    pub title: String,
    pub subtitle: Option<String>,
    /// Article body
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    /// Free-form category label
    #[validate(length(min = 1, message = "category is required"))]
    #[schema(example = "tech")]
    pub category: String,
    /// Estimated read time in minutes
    pub read_time: Option<i32>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    /// Defaults to creation time when omitted
    pub publish_date: Option<DateTime<Utc>>,
    /// Defaults to `false` when omitted
    pub featured: Option<bool>,
    /// Defaults to `draft` when omitted
    pub status: Option<ArticleStatus>,
    pub tags: Option<Vec<String>>,
    /// Human-readable unique key, distinct from the opaque identifier
    #[schema(example = "why-rust")]
    pub slug: Option<String>,
}

/// Article update data transfer object (partial; absent fields are retained)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: Option<String>,
    pub read_time: Option<i32>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub featured: Option<bool>,
    pub status: Option<ArticleStatus>,
    pub tags: Option<Vec<String>>,
    pub slug: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_create() -> CreateArticle {
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

    #[test]
    fn new_article_applies_defaults() {
        let article = Article::new(minimal_create());

        assert_eq!(article.status, ArticleStatus::Draft);
        assert!(!article.featured);
        assert!(article.slug.is_none());
        assert_eq!(article.tags, vec!["go", "rust"]);
        assert_eq!(article.publish_date, article.last_modified);
    }

    #[test]
    fn new_article_keeps_caller_overrides() {
        let mut fields = minimal_create();
        fields.status = Some(ArticleStatus::Published);
        fields.featured = Some(true);
        let article = Article::new(fields);

        assert_eq!(article.status, ArticleStatus::Published);
        assert!(article.featured);
    }

    #[test]
    fn empty_slug_is_normalized_to_none() {
        let mut fields = minimal_create();
        fields.slug = Some(String::new());
        assert!(Article::new(fields).slug.is_none());
    }

    #[test]
    fn apply_merges_and_retains_unspecified_fields() {
        let mut article = Article::new(minimal_create());
        let before = article.last_modified;

        article.apply(UpdateArticle {
            status: Some(ArticleStatus::Published),
            ..Default::default()
        });

        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.title, "A");
        assert_eq!(article.content, "x");
        assert!(article.last_modified >= before);
    }

    #[test]
    fn apply_can_rescind_publication() {
        let mut fields = minimal_create();
        fields.status = Some(ArticleStatus::Published);
        let mut article = Article::new(fields);

        article.apply(UpdateArticle {
            status: Some(ArticleStatus::Draft),
            ..Default::default()
        });

        assert!(!article.is_published());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ArticleStatus::Published).unwrap(),
            "\"published\""
        );
        assert_eq!(ArticleStatus::from("published"), ArticleStatus::Published);
        assert_eq!(ArticleStatus::from("bogus"), ArticleStatus::Draft);
    }

    #[test]
    fn every_valid_status_round_trips_through_text() {
        for literal in crate::config::VALID_STATUSES {
            let status = ArticleStatus::from(*literal);
            assert_eq!(status.to_string(), *literal);
        }
    }

    #[test]
    fn unknown_status_literal_is_rejected_at_deserialization() {
        let result: Result<ArticleStatus, _> = serde_json::from_str("\"archived\"");
        assert!(result.is_err());
    }

    #[test]
    fn article_uses_camel_case_wire_format() {
        let article = Article::new(minimal_create());
        let json = serde_json::to_value(&article).unwrap();

        assert!(json.get("publishDate").is_some());
        assert!(json.get("lastModified").is_some());
        assert!(json.get("publish_date").is_none());
    }

    #[test]
    fn create_validation_flags_empty_required_fields() {
        let mut fields = minimal_create();
        fields.title = String::new();
        fields.content = String::new();
        assert!(fields.validate().is_err());
    }
}
