/**
 * Token Signing and Verification
 *
 * Issues the opaque credential strings carried in the `x-auth` header.
 * Tokens are JWTs whose claims bind a user id (`sub`) to an access
 * scope; the only scope issued here is `"auth"`.
 *
 * A verified signature alone does not authenticate a request: the
 * middleware additionally requires the presented token to appear in the
 * user's persisted token list (see `users::find_by_token`).
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Access scope granted to login/signup tokens.
pub const AUTH_ACCESS: &str = "auth";

/// Token claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Access scope ("auth")
    pub access: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Signing secret from the environment, with a development fallback.
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using development secret");
        "dev-secret-change-in-production".to_string()
    })
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Sign a token for a user with the "auth" access scope.
///
/// Tokens expire after 30 days.
pub fn create_token(user_id: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        access: AUTH_ACCESS.to_string(),
        exp: now + 30 * 24 * 60 * 60,
        iat: now,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a token signature and decode its claims.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}
