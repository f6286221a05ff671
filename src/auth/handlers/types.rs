/**
 * User Request and Response Types
 *
 * Request fields are optional so that a missing field is handled as a
 * validation failure (400) in the handler rather than rejected by the
 * JSON extractor. The public user shape never includes the password
 * hash or the token list.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Create-user request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateUserRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: Option<String>,
    /// User's password (verified against the stored hash)
    pub password: Option<String>,
}

/// Public user shape (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID
    pub id: String,
    /// User's email address
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
        }
    }
}
