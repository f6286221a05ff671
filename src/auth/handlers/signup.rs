/**
 * Signup Handler
 *
 * POST /users - creates a user from `{email, password}`.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Reject duplicate emails
 * 3. Hash the password with bcrypt
 * 4. Create the user document
 * 5. Issue an "auth"-scoped token and persist it on the user
 * 6. Return the public user with the token in the `x-auth` header
 *
 * # Errors
 *
 * * `400 Bad Request` - invalid email, short password, or duplicate email
 */

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{CreateUserRequest, UserResponse};
use crate::auth::users::{create_user, find_by_email, generate_auth_token};
use crate::error::ApiError;
use crate::middleware::auth::AUTH_HEADER;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Basic email format check: one `@` with a non-empty local part and a
/// dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Create a new user account.
pub async fn signup(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = request.email.as_deref().map(str::trim).unwrap_or("");
    let password = request.password.as_deref().unwrap_or("");

    if !is_valid_email(email) {
        return Err(ApiError::validation("invalid email format"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation("password too short"));
    }

    // Duplicate check before insert; the unique index backs this up
    // against concurrent signups.
    if find_by_email(&pool, email).await?.is_some() {
        tracing::warn!(%email, "Signup rejected, email already registered");
        return Err(ApiError::validation("email already registered"));
    }

    let password_hash = hash(password, DEFAULT_COST)?;
    let user = create_user(&pool, email, &password_hash).await?;
    let token = generate_auth_token(&pool, &user).await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok(([(AUTH_HEADER, token)], Json(UserResponse::from(&user))))
}
