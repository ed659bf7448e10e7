//! Comment HTTP Handlers
//!
//! - `POST /api/comments` (token required)
//! - `GET /api/posts/{id}/comments`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::service::CommentService;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::AuthUser;
use crate::shared::{CommentCreatedResponse, CommentListResponse, CreateCommentRequest};

/// Create a comment on an existing post
///
/// # Errors
///
/// * `400 Bad Request` - Blank content, or `post_id` missing or not a UUID
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - The post (or the caller's account) does not exist
pub async fn create_comment(
    State(comments): State<CommentService>,
    caller: AuthUser,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CommentCreatedResponse>)> {
    let Json(request) = payload?;
    let comment = comments.create_comment(caller.user_id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            message: "comment created successfully".to_string(),
            comment,
        }),
    ))
}

/// List the comments of a post, oldest first
///
/// Unlike the post routes, a malformed id here is a client error (`400`)
/// rather than a missing resource.
pub async fn get_post_comments(
    State(comments): State<CommentService>,
    Path(id): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let post_id = Uuid::parse_str(&id).map_err(|_| ApiError::bad_request("invalid post id"))?;
    let comments = comments.post_comments(post_id).await?;
    Ok(Json(CommentListResponse { comments }))
}
