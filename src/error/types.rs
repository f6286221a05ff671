/**
 * API Error Types
 *
 * Every model-layer failure is caught at the router boundary and
 * translated into one of these variants. The status-code taxonomy:
 *
 * - `Validation` - bad input shape or content, 400 with a message
 * - `InvalidCredentials` - login mismatch, uniform empty 400 regardless
 *   of whether the email or the password was wrong
 * - `NotFound` - missing or malformed identifier, empty 404
 * - `Unauthorized` - missing/invalid auth token, empty 401
 * - `Store` / `Internal` - store and infrastructure failures, opaque 400
 *   with no leaked detail
 *
 * Nothing maps to a 5xx: a single request's failure never takes the
 * process with it, and infra errors deliberately stay opaque.
 */

use thiserror::Error;

/// API error type returned by handlers and model operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request input (missing field, empty text, bad email, ...)
    #[error("validation failed: {0}")]
    Validation(String),

    /// Login credential mismatch. Carries no detail about which field
    /// was wrong.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing document or malformed identifier. The two are not
    /// distinguished to the caller.
    #[error("not found")]
    NotFound,

    /// Missing, malformed, or unmatched authentication token.
    #[error("unauthorized")]
    Unauthorized,

    /// Document store failure.
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),

    /// Other infrastructure failure (password hashing, token signing).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> Self {
        ApiError::Internal(format!("password hashing failed: {e}"))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        ApiError::Internal(format!("token signing failed: {e}"))
    }
}
