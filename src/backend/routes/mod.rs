//! Route Configuration Module
//!
//! - **`router`** - Main router creation and layer assembly
//! - **`api_routes`** - The REST endpoint table

/// Main router creation
pub mod router;

/// API endpoint table
pub mod api_routes;

pub use router::create_router;
