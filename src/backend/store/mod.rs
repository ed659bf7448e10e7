//! Storage Port
//!
//! The domain services talk to persistence only through [`BlogStore`].
//! Two adapters implement it:
//!
//! - **`postgres`** - [`PgStore`], sqlx over a `PgPool`
//! - **`memory`** - [`MemoryStore`], in-process tables behind a `RwLock`
//!
//! # Ordering guarantees
//!
//! - `list_posts` returns newest-first (ties broken by id, descending)
//! - `comments_for_post` returns oldest-first (ties broken by id, ascending)
//!
//! Ids are UUID v7, so id order follows insertion order.
//!
//! # Deletion
//!
//! `delete_post` removes the post's comments along with it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::UserSummary;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Failures reported by a storage adapter
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("unique constraint violated: {0}")]
    Conflict(String),

    /// A foreign key pointed at a row that does not exist
    #[error("referenced row does not exist: {0}")]
    MissingReference(String),

    /// Anything else the backend reported
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return Self::MissingReference(db_err.message().to_string());
            }
        }
        Self::Backend(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A stored user, hash included. Never serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub content: String,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithOwner {
    pub post: PostRecord,
    pub owner: UserSummary,
}

/// Row of the post listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListing {
    pub post: PostRecord,
    pub owner: UserSummary,
    pub comment_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithOwner {
    pub comment: CommentRecord,
    pub owner: UserSummary,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
}

/// Fields to overwrite; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub content: String,
}

/// Persistence contract for users, posts, and comments.
#[async_trait]
pub trait BlogStore: Send + Sync {
    // User operations
    async fn insert_user(&self, user: NewUser) -> StoreResult<UserRecord>;
    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRecord>>;
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>>;
    /// True if any user already holds this username or this email
    async fn identity_taken(&self, username: &str, email: &str) -> StoreResult<bool>;

    // Post operations
    async fn insert_post(&self, post: NewPost) -> StoreResult<PostRecord>;
    async fn find_post_by_id(&self, id: Uuid) -> StoreResult<Option<PostRecord>>;
    async fn find_post_with_owner(&self, id: Uuid) -> StoreResult<Option<PostWithOwner>>;
    async fn list_posts(&self) -> StoreResult<Vec<PostListing>>;
    /// Returns the updated row, or `None` if the post is gone
    async fn update_post(&self, id: Uuid, changes: PostChanges) -> StoreResult<Option<PostRecord>>;
    /// Returns whether a post was removed
    async fn delete_post(&self, id: Uuid) -> StoreResult<bool>;

    // Comment operations
    async fn insert_comment(&self, comment: NewComment) -> StoreResult<CommentRecord>;
    async fn comments_for_post(&self, post_id: Uuid) -> StoreResult<Vec<CommentWithOwner>>;
}
