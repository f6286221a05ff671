/**
 * Get Todo Handler
 *
 * GET /todos/:id - returns `{todo}` for a well-formed, existing id.
 *
 * # Errors
 *
 * * `404 Not Found` - malformed id or no document with that id
 */

use axum::extract::{Path, State};
use axum::response::Json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::todos::handlers::types::{well_formed_id, TodoResponse};
use crate::todos::model;

/// Fetch a single todo by id.
pub async fn get_todo(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    well_formed_id(&id)?;

    let todo = model::find_by_id(&pool, &id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(TodoResponse { todo }))
}
