//! Middleware Module
//!
//! Request-processing middleware for the HTTP server.

/// Token authentication middleware
pub mod auth;

// Re-export commonly used types
pub use auth::{require_auth, CurrentUser, AUTH_HEADER};
