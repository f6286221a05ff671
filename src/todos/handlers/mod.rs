//! Todo Route Handlers
//!
//! One file per endpoint:
//!
//! - `POST /todos` - `create`
//! - `GET /todos` - `list`
//! - `GET /todos/:id` - `get`
//! - `PATCH /todos/:id` - `update`
//! - `DELETE /todos/:id` - `delete`

/// Request and response types
pub mod types;

/// Create todo handler
pub mod create;

/// List todos handler
pub mod list;

/// Get single todo handler
pub mod get;

/// Update todo handler
pub mod update;

/// Delete todo handler
pub mod delete;

pub use create::create_todo;
pub use delete::delete_todo;
pub use get::get_todo;
pub use list::list_todos;
pub use update::update_todo;
