/**
 * List Todos Handler
 *
 * GET /todos - returns every todo as `{todos: [...]}`. No pagination,
 * no filtering.
 */

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::todos::handlers::types::TodoListResponse;
use crate::todos::model;

/// List all todos.
pub async fn list_todos(
    State(pool): State<SqlitePool>,
) -> Result<Json<TodoListResponse>, ApiError> {
    let todos = model::find_all(&pool).await?;
    Ok(Json(TodoListResponse { todos }))
}
