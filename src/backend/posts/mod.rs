//! Posts Module
//!
//! Blog post CRUD with single-owner mutation rules.

pub mod handlers;
pub mod service;

pub use handlers::{create_post, delete_post, get_post, get_posts, update_post};
pub use service::PostService;
