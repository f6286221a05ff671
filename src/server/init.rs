/**
 * Server Initialization
 *
 * Builds the Axum application from a connected document store. The
 * store pool is the only injected dependency; everything else hangs
 * off the router.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::routes::create_router;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// Takes an already-connected store pool so that tests can pass an
/// isolated in-memory store per run.
pub fn create_app(pool: SqlitePool) -> Router {
    let state = AppState::new(pool);
    create_router(state)
}
