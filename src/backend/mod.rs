//! Backend Module
//!
//! The Axum HTTP server for the blog API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route table and router assembly
//! - **`middleware`** - Bearer-token extractor, tracing and CORS layers
//! - **`auth`** - Registration, login, JWT tokens
//! - **`posts`** - Post CRUD with owner-only mutation
//! - **`comments`** - Comments on posts
//! - **`store`** - `BlogStore` port with PostgreSQL and in-memory adapters
//! - **`error`** - `ApiError` and its JSON rendering
//!
//! # Request Flow
//!
//! ```text
//! request → TraceLayer → CorsLayer → [AuthUser] → handler → service → BlogStore
//! ```
//!
//! Handlers stay thin: they unpack the request, call one service method, and
//! wrap the result. Services own the rules (validation, ownership, existence
//! checks) and only see the store through the `BlogStore` trait.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Middleware for request processing
pub mod middleware;

/// Authentication and user management
pub mod auth;

/// Blog posts
pub mod posts;

/// Comments on posts
pub mod comments;

/// Storage port and adapters
pub mod store;

/// Backend error types
pub mod error;

/// Liveness probe
pub mod health;

pub use error::{ApiError, ApiResult};
pub use server::{create_app, AppConfig, AppState};
