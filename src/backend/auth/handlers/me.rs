/**
 * Current User Handler
 *
 * GET /api/user
 *
 * Requires a valid bearer token. The token only proves who the caller was
 * when it was issued, so the account is looked up again and a deleted user
 * yields `404`.
 */
use axum::{extract::State, Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiResult;
use crate::backend::middleware::AuthUser;
use crate::shared::CurrentUserResponse;

/// # Errors
///
/// * `401 Unauthorized` - Missing, malformed, or expired token
/// * `404 Not Found` - The token's user no longer exists
pub async fn get_me(
    State(auth): State<AuthService>,
    caller: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let user = auth.current_user(caller.user_id).await?;
    Ok(Json(CurrentUserResponse { user }))
}
