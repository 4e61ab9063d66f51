//! Services layer - Application use cases and business logic.

mod article_service;

pub use article_service::{ArticleManager, ArticleService};
