/**
 * Application State Management
 *
 * The `AppState` struct is the central state container for the Axum
 * application. It holds the document store connection pool, which is
 * opened once at startup and shared read-only by every request.
 *
 * The `FromRef` implementation lets handlers extract the pool directly
 * with `State(pool): State<SqlitePool>` instead of taking the whole
 * `AppState`, following Axum's recommended substate pattern.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Document store connection pool
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Allow handlers to extract the store pool directly from `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
