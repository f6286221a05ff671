//! Todos Module
//!
//! Todo document model and the HTTP handlers for the `/todos` routes.

/// Todo document and store operations
pub mod model;

/// HTTP handlers for todo routes
pub mod handlers;

// Re-export commonly used types
pub use model::Todo;
