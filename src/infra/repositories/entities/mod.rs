//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod article;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use article::{ActiveModel as ArticleActiveModel, Entity as ArticleEntity, Model as ArticleModel};
