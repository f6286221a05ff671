/**
 * Delete Todo Handler
 *
 * DELETE /todos/:id - removes the todo and returns it as `{todo}`.
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

/// Remove a todo by id, responding with the removed document.
pub async fn delete_todo(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    well_formed_id(&id)?;

    let todo = model::delete_by_id(&pool, &id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::info!(todo_id = %todo.id, "Todo removed");

    Ok(Json(TodoResponse { todo }))
}
