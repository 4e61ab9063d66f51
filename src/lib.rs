//! Article API - Content-management backend for article publishing
//!
//! Stores articles with editorial metadata (status, category, tags,
//! featured flag, slug) and exposes query, create, update, and delete
//! operations over HTTP. Reader-facing access only ever sees published
//! articles; administrative access operates over all statuses.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Article entity, status workflow, and query builder
//! - **services**: Article lifecycle business logic
//! - **infra**: Infrastructure concerns (database, repository)
//! - **api**: HTTP handlers, routes, and extractors
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Article, ArticleQuery, ArticleStatus, Scope};
pub use errors::{AppError, AppResult};
