/**
 * API Route Table
 *
 * ## Public
 * - `POST /api/register` - User registration
 * - `POST /api/login` - Token issuance
 * - `GET /api/posts` - All posts, newest first
 * - `GET /api/posts/{id}` - One post with its comments
 * - `GET /api/posts/{id}/comments` - Comments of one post
 *
 * ## Token required
 * - `GET /api/user` - Current user info
 * - `POST /api/posts` - Create a post
 * - `PUT /api/posts/{id}` - Update own post
 * - `DELETE /api/posts/{id}` - Delete own post
 * - `POST /api/comments` - Comment on a post
 *
 * Protected handlers take an `AuthUser` argument, so the token check lives
 * in the handler signature rather than in a route layer.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::comments::{create_comment, get_post_comments};
use crate::backend::health::health;
use crate::backend::posts::{create_post, delete_post, get_post, get_posts, update_post};
use crate::backend::server::state::AppState;

pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/user", get(get_me))
        // Post endpoints
        .route("/api/posts", get(get_posts).post(create_post))
        .route(
            "/api/posts/{id}",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/api/posts/{id}/comments", get(get_post_comments))
        // Comment endpoints
        .route("/api/comments", post(create_comment))
        .route("/health", get(health))
}
