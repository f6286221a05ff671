/**
 * Current-User Handler
 *
 * GET /users/me - returns the authenticated user. The route is guarded
 * by the authentication middleware, which resolves the `x-auth` token
 * and stashes the user in the request extensions; the `CurrentUser`
 * extractor picks it up from there.
 */

use axum::response::Json;

use crate::auth::handlers::types::UserResponse;
use crate::middleware::auth::CurrentUser;

/// Return the user resolved by the authentication middleware.
pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}
