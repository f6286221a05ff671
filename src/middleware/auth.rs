/**
 * Authentication Middleware
 *
 * Protects routes that require an authenticated user. The token
 * travels in the fixed `x-auth` request header; it is resolved against
 * the user collection by matching a persisted token with the "auth"
 * access scope. On success the resolved user is attached to the
 * request extensions; on any failure the middleware responds 401 and
 * halts. No fallback.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::users::{find_by_token, User};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Fixed request/response header carrying the auth token.
pub const AUTH_HEADER: &str = "x-auth";

/// Authentication middleware
///
/// 1. Reads the token from the `x-auth` header
/// 2. Resolves it to a user via the persisted token list
/// 3. Attaches the user to the request extensions
///
/// Responds 401 if the token is missing, malformed, or unmatched.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing {AUTH_HEADER} header");
            ApiError::Unauthorized
        })?;

    let user = find_by_token(&state.pool, token)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Axum extractor for the user resolved by `require_auth`.
///
/// Use as a handler parameter on protected routes to receive the
/// authenticated user directly.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::Unauthorized
            })
    }
}
