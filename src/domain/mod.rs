//! Domain layer - Core business entities and logic.

mod article;
mod query;

pub use article::{Article, ArticleStatus, CreateArticle, UpdateArticle};
pub use query::{ArticleQuery, Scope};
