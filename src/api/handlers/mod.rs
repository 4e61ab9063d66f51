//! HTTP request handlers.

pub mod article_handler;
pub mod taxonomy_handler;

pub use article_handler::article_routes;
pub use taxonomy_handler::taxonomy_routes;
