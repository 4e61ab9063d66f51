//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Article repository over SeaORM

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ArticleRepository, ArticleStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockArticleRepository;
