//! Authentication Handlers Module
//!
//! HTTP handlers for the account endpoints. Each handler unpacks the request,
//! delegates to [`AuthService`](crate::backend::auth::AuthService), and wraps
//! the result in its response envelope.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/register - User registration
//! - **`login`** - POST /api/login - Token issuance
//! - **`get_me`** - GET /api/user - Current user info

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
