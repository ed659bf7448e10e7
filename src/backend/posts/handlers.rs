//! Post HTTP Handlers
//!
//! Reads are public; create, update, and delete take an [`AuthUser`].
//! Path ids that are not UUIDs cannot name any post, so they are reported
//! as `404` like any other unknown id.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::service::PostService;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::AuthUser;
use crate::shared::{
    CreatePostRequest, MessageResponse, PostDetailResponse, PostListResponse, PostMutationResponse,
    UpdatePostRequest,
};

fn parse_post_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found("post not found"))
}

/// `GET /api/posts`
pub async fn get_posts(State(posts): State<PostService>) -> ApiResult<Json<PostListResponse>> {
    let posts = posts.list_posts().await?;
    Ok(Json(PostListResponse { posts }))
}

/// `GET /api/posts/{id}`
pub async fn get_post(
    State(posts): State<PostService>,
    Path(id): Path<String>,
) -> ApiResult<Json<PostDetailResponse>> {
    let post = posts.get_post(parse_post_id(&id)?).await?;
    Ok(Json(PostDetailResponse { post }))
}

/// `POST /api/posts`
///
/// # Errors
///
/// * `400 Bad Request` - Missing or blank title/content, or title over 200 chars
/// * `401 Unauthorized` - Missing or invalid token
/// * `404 Not Found` - The caller's account no longer exists
pub async fn create_post(
    State(posts): State<PostService>,
    caller: AuthUser,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PostMutationResponse>)> {
    let Json(request) = payload?;
    let post = posts.create_post(caller.user_id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(PostMutationResponse {
            message: "post created successfully".to_string(),
            post,
        }),
    ))
}

/// `PUT /api/posts/{id}`
///
/// Fields left out of the body (or sent as `null`) keep their current value.
///
/// # Errors
///
/// * `403 Forbidden` - The caller is not the author
/// * `404 Not Found` - No such post
pub async fn update_post(
    State(posts): State<PostService>,
    caller: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePostRequest>, JsonRejection>,
) -> ApiResult<Json<PostMutationResponse>> {
    let id = parse_post_id(&id)?;
    let request = payload.map(|Json(request)| request).map_err(ApiError::from);
    let post = posts.update_post(caller.user_id, id, request).await?;

    Ok(Json(PostMutationResponse {
        message: "post updated successfully".to_string(),
        post,
    }))
}

/// `DELETE /api/posts/{id}`
pub async fn delete_post(
    State(posts): State<PostService>,
    caller: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    posts.delete_post(caller.user_id, parse_post_id(&id)?).await?;
    Ok(Json(MessageResponse::new("post deleted successfully")))
}
