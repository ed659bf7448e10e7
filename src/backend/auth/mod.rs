//! Authentication Module
//!
//! User registration, credential checks, and bearer tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT issuance and validation
//! ├── service.rs      - Register / login / current user operations
//! └── handlers/       - HTTP handlers
//!     ├── register.rs
//!     ├── login.rs
//!     └── me.rs
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, password, email → user created → public fields returned
//! 2. **Login**: username and password → credentials verified → JWT returned
//! 3. **Current user**: JWT in `Authorization: Bearer` → user info returned

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// Account operations
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use passwords::PasswordHasher;
pub use service::AuthService;
pub use sessions::{Claims, TokenService};
