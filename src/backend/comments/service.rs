//! Comment operations
//!
//! Comments are append-only: they are created against an existing post and
//! listed oldest-first. They disappear only when their post is deleted.

use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::store::{BlogStore, CommentWithOwner, NewComment};
use crate::shared::{CommentResponse, CreateCommentRequest};

impl From<CommentWithOwner> for CommentResponse {
    fn from(row: CommentWithOwner) -> Self {
        let CommentWithOwner { comment, owner } = row;
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            post_id: comment.post_id,
            user: owner,
            created_at: comment.created_at,
        }
    }
}

#[derive(Clone)]
pub struct CommentService {
    store: Arc<dyn BlogStore>,
}

impl CommentService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    /// Attach a comment by `user_id` to the post named in the request
    pub async fn create_comment(
        &self,
        user_id: Uuid,
        request: CreateCommentRequest,
    ) -> ApiResult<CommentResponse> {
        let post_id = request.validate()?;

        if self.store.find_post_by_id(post_id).await?.is_none() {
            return Err(ApiError::not_found("post not found"));
        }

        let owner = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("user not found"))?
            .summary();

        let comment = self
            .store
            .insert_comment(NewComment {
                user_id,
                post_id,
                content: request.content,
            })
            .await?;

        tracing::info!("Comment {} added to post {} by {}", comment.id, post_id, owner.username);
        Ok(CommentWithOwner { comment, owner }.into())
    }

    /// Comments of one post, oldest first
    pub async fn post_comments(&self, post_id: Uuid) -> ApiResult<Vec<CommentResponse>> {
        if self.store.find_post_by_id(post_id).await?.is_none() {
            return Err(ApiError::not_found("post not found"));
        }

        let comments = self.store.comments_for_post(post_id).await?;
        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }
}
