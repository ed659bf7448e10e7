//! API Response Types
//!
//! Everything the server serializes back to clients. None of these types
//! carry a password or password hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public projection of a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// A post with its owner populated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry of the post listing
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub user: UserSummary,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post with its owner and every comment
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub user: UserSummary,
    pub comments: Vec<CommentResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment with its owner populated
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub user: UserSummary,
    pub created_at: DateTime<Utc>,
}

/// Returned by `POST /api/register`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserSummary,
}

/// Returned by `POST /api/login`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub message: String,
    /// Signed bearer token
    pub token: String,
    pub user: UserSummary,
}

/// Returned by `GET /api/user`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CurrentUserResponse {
    pub user: UserSummary,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostDetailResponse {
    pub post: PostDetail,
}

/// Returned by post create and update
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PostMutationResponse {
    pub message: String,
    pub post: PostResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommentCreatedResponse {
    pub message: String,
    pub comment: CommentResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

/// Plain acknowledgement, e.g. after a delete
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
