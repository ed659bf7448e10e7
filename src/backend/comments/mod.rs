//! Comments Module
//!
//! Creating and listing comments on posts.

pub mod handlers;
pub mod service;

pub use handlers::{create_comment, get_post_comments};
pub use service::CommentService;
