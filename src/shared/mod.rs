//! Shared Module
//!
//! Wire types of the JSON API: request payloads with their validation rules,
//! response bodies, and the validation error they raise. Nothing here touches
//! the database or the HTTP stack, so clients can reuse these types as-is.

/// Response bodies
pub mod models;

/// Request payloads and validation
pub mod requests;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use models::{
    AuthResponse, CommentCreatedResponse, CommentListResponse, CommentResponse,
    CurrentUserResponse, MessageResponse, PostDetail, PostDetailResponse, PostListResponse,
    PostMutationResponse, PostResponse, PostSummary, RegisterResponse, UserSummary,
};
pub use requests::{
    CreateCommentRequest, CreatePostRequest, LoginRequest, RegisterRequest, UpdatePostRequest,
};
