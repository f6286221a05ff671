/**
 * Login Handler
 *
 * POST /users/login - verifies `{email, password}` against the stored
 * hash and issues a fresh "auth"-scoped token.
 *
 * # Errors
 *
 * * `400 Bad Request` - any credential mismatch. Unknown email and
 *   wrong password are deliberately indistinguishable.
 */

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{LoginRequest, UserResponse};
use crate::auth::users::{find_by_credentials, generate_auth_token};
use crate::error::ApiError;
use crate::middleware::auth::AUTH_HEADER;

/// Log a user in, echoing the new token in the `x-auth` header.
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = request.email.as_deref().map(str::trim).unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");

    let user = find_by_credentials(&pool, email, password).await?;
    let token = generate_auth_token(&pool, &user).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(([(AUTH_HEADER, token)], Json(UserResponse::from(&user))))
}
