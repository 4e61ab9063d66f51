//! Application state - Dependency injection container.
//!
//! Provides centralized access to the article service and database handle.

use std::sync::Arc;

use crate::infra::{ArticleStore, Database};
use crate::services::{ArticleManager, ArticleService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Article service
    pub article_service: Arc<dyn ArticleService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a database handle, wiring the
    /// SeaORM-backed article store into the service.
    pub fn from_database(database: Arc<Database>) -> Self {
        let repo = Arc::new(ArticleStore::new(database.get_connection()));

        Self {
            article_service: Arc::new(ArticleManager::new(repo)),
            database,
        }
    }

    /// Create application state with a manually injected service
    /// (used by tests).
    pub fn new(article_service: Arc<dyn ArticleService>, database: Arc<Database>) -> Self {
        Self {
            article_service,
            database,
        }
    }
}
