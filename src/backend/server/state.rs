/**
 * Application State Management
 *
 * `AppState` is the router state. It holds one service per domain area,
 * each wrapping the same `Arc<dyn BlogStore>`. The `FromRef` impls let a
 * handler extract just the service it needs with `State<PostService>` and
 * similar, instead of the whole state.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::{AuthService, PasswordHasher, TokenService};
use crate::backend::comments::CommentService;
use crate::backend::posts::PostService;
use crate::backend::store::BlogStore;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub posts: PostService,
    pub comments: CommentService,
}

impl AppState {
    /// Wire every service to the same store
    pub fn new(store: Arc<dyn BlogStore>, passwords: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            auth: AuthService::new(store.clone(), passwords, tokens),
            posts: PostService::new(store.clone()),
            comments: CommentService::new(store),
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for PostService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.posts.clone()
    }
}

impl FromRef<AppState> for CommentService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.comments.clone()
    }
}
