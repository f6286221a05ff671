//! User Route Handlers
//!
//! One file per endpoint:
//!
//! - `POST /users` - `signup`
//! - `POST /users/login` - `login`
//! - `GET /users/me` - `current_user` (protected)

/// Request and response types
pub mod types;

/// User creation handler
pub mod signup;

/// Login handler
pub mod login;

/// Current-user handler
pub mod me;

pub use login::login;
pub use me::current_user;
pub use signup::signup;
