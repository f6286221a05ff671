/**
 * Todo Request and Response Types
 *
 * Request fields are optional so that a missing field is handled as a
 * validation failure (400) in the handler rather than rejected by the
 * JSON extractor.
 */

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::todos::model::Todo;

/// Create todo request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateTodoRequest {
    /// Todo text (required, non-empty after trimming)
    pub text: Option<String>,
}

/// Update todo request
///
/// `completed: true` sets the completion timestamp; anything else
/// (false or absent) clears both the flag and the timestamp.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateTodoRequest {
    /// Replacement text, left unchanged when absent
    pub text: Option<String>,
    /// Completion flag
    pub completed: Option<bool>,
}

/// Single-todo response wrapper
#[derive(Serialize, Deserialize, Debug)]
pub struct TodoResponse {
    pub todo: Todo,
}

/// Todo-list response wrapper
#[derive(Serialize, Deserialize, Debug)]
pub struct TodoListResponse {
    pub todos: Vec<Todo>,
}

/// Well-formedness check for path identifiers.
///
/// A malformed id is treated exactly like a missing document: both
/// surface as 404, and the store is never consulted for malformed ids.
pub fn well_formed_id(id: &str) -> Result<&str, ApiError> {
    uuid::Uuid::parse_str(id).map_err(|_| ApiError::NotFound)?;
    Ok(id)
}
