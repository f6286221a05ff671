/**
 * Todo Model and Store Operations
 *
 * The todo document and its store operations. All operations are direct
 * pass-throughs to the `todos` collection; the `completedAt` derivation
 * happens in the PATCH handler before `update_by_id` is called.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Todo document stored in the `todos` collection.
///
/// `completed_at` is a millisecond Unix timestamp, present exactly when
/// the todo is completed. Serializes as camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique todo ID (UUID string, assigned at create)
    pub id: String,
    /// Todo text (non-empty)
    pub text: String,
    /// Completion flag
    pub completed: bool,
    /// Completion timestamp in milliseconds, null unless completed
    pub completed_at: Option<i64>,
}

/// Insert a new todo with the given text.
///
/// The todo starts uncompleted with no completion timestamp.
pub async fn create(pool: &SqlitePool, text: &str) -> Result<Todo, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();

    let todo = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (id, text, completed, completed_at)
        VALUES (?, ?, 0, NULL)
        RETURNING id, text, completed, completed_at
        "#,
    )
    .bind(&id)
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(todo)
}

/// Fetch every todo in the collection. No pagination, no filtering.
pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, text, completed, completed_at
        FROM todos
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Look up a todo by identifier.
pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, text, completed, completed_at
        FROM todos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Remove a todo by identifier, returning the removed document.
pub async fn delete_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        DELETE FROM todos
        WHERE id = ?
        RETURNING id, text, completed, completed_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Update a todo by identifier, returning the updated document.
///
/// `text` is only written when present; `completed` and `completed_at`
/// are always written with the values the caller derived.
pub async fn update_by_id(
    pool: &SqlitePool,
    id: &str,
    text: Option<&str>,
    completed: bool,
    completed_at: Option<i64>,
) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET text = COALESCE(?, text), completed = ?, completed_at = ?
        WHERE id = ?
        RETURNING id, text, completed, completed_at
        "#,
    )
    .bind(text)
    .bind(completed)
    .bind(completed_at)
    .bind(id)
    .fetch_optional(pool)
    .await
}
