/**
 * User Model and Store Operations
 *
 * The user document and its store operations. Passwords are stored as
 * bcrypt hashes, never the original value. Issued tokens live in an
 * embedded list on the document (a JSON column), each entry tied to an
 * access scope; request authentication does a reverse lookup against
 * that list.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::auth::tokens::{self, AUTH_ACCESS};
use crate::error::ApiError;

/// An issued authentication token tied to an access scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    /// Access scope ("auth")
    pub access: String,
    /// Opaque token string
    pub token: String,
}

/// User document stored in the `users` collection.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID string)
    pub id: String,
    /// Email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Ordered list of issued tokens
    pub tokens: Json<Vec<AuthToken>>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a new user with an already-hashed password.
///
/// Email uniqueness is enforced by the store index; a duplicate insert
/// fails with a store error the handler maps to 400.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, tokens, created_at)
        VALUES (?, ?, ?, '[]', ?)
        RETURNING id, email, password_hash, tokens, created_at
        "#,
    )
    .bind(&id)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Look up a user by email.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, tokens, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by identifier.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, tokens, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Verify a user's credentials.
///
/// Unknown email and wrong password are indistinguishable to the
/// caller: both fail with `InvalidCredentials` and no further detail.
pub async fn find_by_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let user = find_by_email(pool, email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = bcrypt::verify(password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}

/// Issue a new "auth"-scoped token for a user.
///
/// Signs a token, appends it to the user's persisted token list, and
/// returns the token string for the response header.
pub async fn generate_auth_token(pool: &SqlitePool, user: &User) -> Result<String, ApiError> {
    let token = tokens::create_token(&user.id)?;

    let mut updated = user.tokens.0.clone();
    updated.push(AuthToken {
        access: AUTH_ACCESS.to_string(),
        token: token.clone(),
    });

    sqlx::query(
        r#"
        UPDATE users
        SET tokens = ?
        WHERE id = ?
        "#,
    )
    .bind(Json(updated))
    .bind(&user.id)
    .execute(pool)
    .await?;

    Ok(token)
}

/// Reverse token lookup used by the authentication middleware.
///
/// Verifies the signature, loads the user named by the token, then
/// scans the persisted token list for an entry with the "auth" scope
/// and an exact token match. Any failure along the way resolves to
/// `None` rather than an error; only store failures propagate.
pub async fn find_by_token(pool: &SqlitePool, token: &str) -> Result<Option<User>, ApiError> {
    let claims = match tokens::verify_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Token verification failed: {e}");
            return Ok(None);
        }
    };

    if claims.access != AUTH_ACCESS {
        return Ok(None);
    }

    let Some(user) = find_by_id(pool, &claims.sub).await? else {
        return Ok(None);
    };

    let matched = user
        .tokens
        .0
        .iter()
        .any(|t| t.access == AUTH_ACCESS && t.token == token);

    Ok(matched.then_some(user))
}
