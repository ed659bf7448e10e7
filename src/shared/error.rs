//! Shared Error Types
//!
//! Errors raised while validating API payloads. They carry the offending
//! field so the HTTP layer can report it back to the client.
//!
//! # Usage
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "title is required");
//! assert!(error.to_string().contains("title"));
//! ```
use thiserror::Error;

/// Validation failures shared by every request type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field is missing, blank, or out of bounds
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }
}
