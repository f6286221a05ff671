/**
 * Create Todo Handler
 *
 * POST /todos - creates a todo from `{text}`.
 *
 * # Errors
 *
 * * `400 Bad Request` - text missing or empty after trimming
 * * `400 Bad Request` - store failure (opaque)
 */

use axum::extract::State;
use axum::response::Json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::todos::handlers::types::CreateTodoRequest;
use crate::todos::model::{self, Todo};

/// Create a new todo.
///
/// Returns the created document directly (no wrapper), matching the
/// response shape the original API exposed.
pub async fn create_todo(
    State(pool): State<SqlitePool>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let text = request.text.as_deref().map(str::trim).unwrap_or("");
    if text.is_empty() {
        return Err(ApiError::validation("text is required"));
    }

    let todo = model::create(&pool, text).await?;
    tracing::info!(todo_id = %todo.id, "Todo created");

    Ok(Json(todo))
}
