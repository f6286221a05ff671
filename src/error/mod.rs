//! API Error Module
//!
//! Error types used in HTTP handlers and their conversion to HTTP
//! responses.
//!
//! - **`types`** - Error type definitions
//! - **`conversion`** - `IntoResponse` implementation

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
