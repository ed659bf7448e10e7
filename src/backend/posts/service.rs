/**
 * Post Operations
 *
 * Create, list, fetch, update, and delete blog posts. Anyone may read;
 * creating requires an authenticated caller, and only a post's author may
 * change or remove it.
 *
 * # Ownership
 *
 * `update_post` and `delete_post` resolve the post first (`NotFound`), then
 * compare its `user_id` with the caller (`Forbidden`). Request validation
 * runs only after both checks pass.
 */

use std::sync::Arc;
use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::backend::store::{BlogStore, NewPost, PostChanges, PostListing, PostRecord, PostWithOwner};
use crate::shared::{
    CommentResponse, CreatePostRequest, PostDetail, PostResponse, PostSummary, UpdatePostRequest,
};

impl From<PostWithOwner> for PostResponse {
    fn from(row: PostWithOwner) -> Self {
        let PostWithOwner { post, owner } = row;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            user: owner,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl From<PostListing> for PostSummary {
    fn from(row: PostListing) -> Self {
        let PostListing { post, owner, comment_count } = row;
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            user: owner,
            comment_count,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

fn post_not_found() -> ApiError {
    ApiError::not_found("post not found")
}

#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn BlogStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self { store }
    }

    pub async fn create_post(&self, user_id: Uuid, request: CreatePostRequest) -> ApiResult<PostResponse> {
        request.validate()?;

        let owner = self
            .store
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("user not found"))?
            .summary();

        let post = self
            .store
            .insert_post(NewPost {
                user_id,
                title: request.title,
                content: request.content,
            })
            .await?;

        tracing::info!("Post created: {} by {}", post.id, owner.username);
        Ok(PostWithOwner { post, owner }.into())
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> ApiResult<Vec<PostSummary>> {
        let posts = self.store.list_posts().await?;
        Ok(posts.into_iter().map(PostSummary::from).collect())
    }

    /// One post with its author and comments
    pub async fn get_post(&self, id: Uuid) -> ApiResult<PostDetail> {
        let PostWithOwner { post, owner } = self
            .store
            .find_post_with_owner(id)
            .await?
            .ok_or_else(post_not_found)?;

        let comments = self
            .store
            .comments_for_post(id)
            .await?
            .into_iter()
            .map(CommentResponse::from)
            .collect();

        Ok(PostDetail {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            user: owner,
            comments,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }

    /// `request` may carry a body rejection; it only surfaces once the
    /// caller is known to own the post.
    pub async fn update_post(
        &self,
        user_id: Uuid,
        id: Uuid,
        request: ApiResult<UpdatePostRequest>,
    ) -> ApiResult<PostResponse> {
        self.owned_post(user_id, id).await?;
        let request = request?;
        request.validate()?;

        if !request.is_empty() {
            let changes = PostChanges {
                title: request.title,
                content: request.content,
            };
            self.store.update_post(id, changes).await?.ok_or_else(post_not_found)?;
            tracing::info!("Post updated: {} by {}", id, user_id);
        }

        let updated = self
            .store
            .find_post_with_owner(id)
            .await?
            .ok_or_else(post_not_found)?;
        Ok(updated.into())
    }

    /// Remove a post and, with it, all of its comments
    pub async fn delete_post(&self, user_id: Uuid, id: Uuid) -> ApiResult<()> {
        self.owned_post(user_id, id).await?;

        if !self.store.delete_post(id).await? {
            return Err(post_not_found());
        }

        tracing::info!("Post deleted: {} by {}", id, user_id);
        Ok(())
    }

    async fn owned_post(&self, user_id: Uuid, id: Uuid) -> ApiResult<PostRecord> {
        let post = self.store.find_post_by_id(id).await?.ok_or_else(post_not_found)?;

        if post.user_id != user_id {
            tracing::warn!("User {} attempted to modify post {} owned by {}", user_id, id, post.user_id);
            return Err(ApiError::forbidden("you can only modify your own posts"));
        }

        Ok(post)
    }
}
