/**
 * In-Memory Storage Adapter
 *
 * Holds the three tables in `Vec`s behind one `tokio::sync::RwLock`, so every
 * operation sees a consistent snapshot. Rows are kept in insertion order,
 * which is also creation-time order.
 *
 * Used by the test suites and as the fallback when no database is
 * configured. Nothing survives a restart.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::store::{
    BlogStore, CommentRecord, CommentWithOwner, NewComment, NewPost, NewUser, PostChanges,
    PostListing, PostRecord, PostWithOwner, StoreError, StoreResult, UserRecord,
};
use crate::shared::UserSummary;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRecord>,
    posts: Vec<PostRecord>,
    comments: Vec<CommentRecord>,
}

impl Tables {
    fn user(&self, id: Uuid) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    fn post(&self, id: Uuid) -> Option<&PostRecord> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn owner_of(&self, user_id: Uuid) -> StoreResult<UserSummary> {
        self.user(user_id)
            .map(UserRecord::summary)
            .ok_or_else(|| StoreError::Backend(format!("dangling user reference {user_id}")))
    }
}

/// Process-local store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<UserRecord> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::Conflict("users.username".to_string()));
        }
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict("users.email".to_string()));
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::now_v7(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(record.clone());
        Ok(record)
    }

    async fn find_user_by_id(&self, id: Uuid) -> StoreResult<Option<UserRecord>> {
        Ok(self.tables.read().await.user(id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn identity_taken(&self, username: &str, email: &str) -> StoreResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .any(|u| u.username == username || u.email == email))
    }

    async fn insert_post(&self, post: NewPost) -> StoreResult<PostRecord> {
        let mut tables = self.tables.write().await;
        if tables.user(post.user_id).is_none() {
            return Err(StoreError::MissingReference(format!("users.id {}", post.user_id)));
        }

        let now = Utc::now();
        let record = PostRecord {
            id: Uuid::now_v7(),
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.posts.push(record.clone());
        Ok(record)
    }

    async fn find_post_by_id(&self, id: Uuid) -> StoreResult<Option<PostRecord>> {
        Ok(self.tables.read().await.post(id).cloned())
    }

    async fn find_post_with_owner(&self, id: Uuid) -> StoreResult<Option<PostWithOwner>> {
        let tables = self.tables.read().await;
        let Some(post) = tables.post(id) else {
            return Ok(None);
        };
        let owner = tables.owner_of(post.user_id)?;
        Ok(Some(PostWithOwner { post: post.clone(), owner }))
    }

    async fn list_posts(&self) -> StoreResult<Vec<PostListing>> {
        let tables = self.tables.read().await;
        tables
            .posts
            .iter()
            .rev()
            .map(|post| {
                let comment_count = tables
                    .comments
                    .iter()
                    .filter(|c| c.post_id == post.id)
                    .count();
                Ok(PostListing {
                    post: post.clone(),
                    owner: tables.owner_of(post.user_id)?,
                    comment_count: i64::try_from(comment_count)
                        .map_err(|e| StoreError::Backend(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn update_post(&self, id: Uuid, changes: PostChanges) -> StoreResult<Option<PostRecord>> {
        let mut tables = self.tables.write().await;
        let Some(post) = tables.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        post.updated_at = Utc::now();
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: Uuid) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Ok(false);
        }
        tables.comments.retain(|c| c.post_id != id);
        Ok(true)
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<CommentRecord> {
        let mut tables = self.tables.write().await;
        if tables.post(comment.post_id).is_none() {
            return Err(StoreError::MissingReference(format!("posts.id {}", comment.post_id)));
        }
        if tables.user(comment.user_id).is_none() {
            return Err(StoreError::MissingReference(format!("users.id {}", comment.user_id)));
        }

        let record = CommentRecord {
            id: Uuid::now_v7(),
            content: comment.content,
            user_id: comment.user_id,
            post_id: comment.post_id,
            created_at: Utc::now(),
        };
        tables.comments.push(record.clone());
        Ok(record)
    }

    async fn comments_for_post(&self, post_id: Uuid) -> StoreResult<Vec<CommentWithOwner>> {
        let tables = self.tables.read().await;
        tables
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|comment| {
                Ok(CommentWithOwner {
                    comment: comment.clone(),
                    owner: tables.owner_of(comment.user_id)?,
                })
            })
            .collect()
    }
}
