//! Middleware Module
//!
//! Request processing that runs before (or around) the handlers:
//!
//! - **`auth`** - bearer-token extractor for protected routes
//! - **`layers`** - tower layers for request tracing and CORS

pub mod auth;
pub mod layers;

pub use auth::{authenticate, bearer_token, AuthUser};
pub use layers::{add_layers, cors_layer};
