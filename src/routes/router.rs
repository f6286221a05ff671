/**
 * Router Configuration
 *
 * Combines all routes into a single Axum router.
 *
 * # Routes
 *
 * ## Todos
 * - `POST /todos` - create a todo
 * - `GET /todos` - list all todos
 * - `GET /todos/{id}` - fetch one todo
 * - `PATCH /todos/{id}` - update text/completion
 * - `DELETE /todos/{id}` - remove a todo
 *
 * ## Users
 * - `POST /users` - create a user (public)
 * - `POST /users/login` - log in (public)
 * - `GET /users/me` - current user (requires `x-auth` token)
 *
 * Only `/users/me` sits behind the authentication middleware; every
 * other route is public.
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers::{current_user, login, signup};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::todos::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    // Protected routes: the middleware resolves the x-auth token to a
    // user before the handler runs.
    let protected = Router::new()
        .route("/users/me", get(current_user))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/todos", post(create_todo).get(list_todos))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .route("/users", post(signup))
        .route("/users/login", post(login))
        .merge(protected)
        .with_state(state)
}
