//! Server Module
//!
//! Startup plumbing for the HTTP server.
//!
//! - **`config`** - `AppConfig` from a TOML file and environment variables
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`init`** - store selection and app creation

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AppConfig, ConfigError};
pub use init::{build_state, build_store, create_app, InitError};
pub use state::AppState;
