/**
 * Update Todo Handler
 *
 * PATCH /todos/:id - accepts `{text?, completed?}` and returns the
 * updated document as `{todo}`.
 *
 * The `completedAt` invariant lives here: a PATCH that sets
 * `completed: true` stamps the current time in milliseconds; any other
 * PATCH forces `completed = false` and clears the timestamp. Repeated
 * application is idempotent apart from the timestamp value itself.
 *
 * # Errors
 *
 * * `404 Not Found` - malformed id or no document with that id
 * * `400 Bad Request` - store failure (opaque)
 */

use axum::extract::{Path, State};
use axum::response::Json;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::todos::handlers::types::{well_formed_id, TodoResponse, UpdateTodoRequest};
use crate::todos::model;

/// Patch a todo by id.
pub async fn update_todo(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ApiError> {
    well_formed_id(&id)?;

    let (completed, completed_at) = match request.completed {
        Some(true) => (true, Some(Utc::now().timestamp_millis())),
        _ => (false, None),
    };

    let todo = model::update_by_id(&pool, &id, request.text.as_deref(), completed, completed_at)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(TodoResponse { todo }))
}
