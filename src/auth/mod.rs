//! Authentication Module
//!
//! User model, token issuance/verification, and the HTTP handlers for
//! the `/users` routes.
//!
//! - **`users`** - User document and store operations (credential
//!   verification, token persistence, reverse token lookup)
//! - **`tokens`** - Signed token creation and verification
//! - **`handlers`** - Signup, login, and current-user endpoints

/// User document and store operations
pub mod users;

/// Token signing and verification
pub mod tokens;

/// HTTP handlers for user routes
pub mod handlers;

// Re-export commonly used types
pub use users::{AuthToken, User};
