//! Backend Error Module
//!
//! - **`types`** - `ApiError` and its status mapping
//! - **`conversion`** - `IntoResponse` plus conversions from store,
//!   validation, JSON-rejection, and hashing errors
//!
//! Handlers return `Result<_, ApiError>` and let `?` do the rest.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;
