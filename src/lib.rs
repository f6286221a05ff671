//! Todo API Library
//!
//! HTTP CRUD service for todo items with token-based user authentication,
//! backed by a SQLite document store (two collections: `todos`, `users`).
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`todos`** - Todo model and request handlers
//! - **`auth`** - User model, password hashing, token issuance
//! - **`middleware`** - Token authentication middleware
//! - **`error`** - API error types and HTTP response conversion

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Todo model and handlers
pub mod todos;

/// User model, tokens, and auth handlers
pub mod auth;

/// Request-processing middleware
pub mod middleware;

/// API error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
pub use server::state::AppState;
