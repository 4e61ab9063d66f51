//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod article_repository;
pub(crate) mod entities;

pub use article_repository::{ArticleRepository, ArticleStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use article_repository::MockArticleRepository;
