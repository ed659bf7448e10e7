/**
 * Login Handler
 *
 * POST /api/login
 *
 * Verifies the username and password and returns a signed bearer token
 * together with the public user fields.
 *
 * # Security
 *
 * - Passwords are verified with bcrypt
 * - Unknown username and wrong password return the same `401` body
 * - Tokens expire after the configured lifetime (24 hours by default)
 */
use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiResult;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, or username/password missing
/// * `401 Unauthorized` - Unknown user or incorrect password
/// * `500 Internal Server Error` - Database or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "login successful",
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": { "id": "...", "username": "alice", "email": "alice@example.com" }
/// }
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.username);

    let (token, user) = auth.login(request).await?;

    Ok(Json(AuthResponse {
        message: "login successful".to_string(),
        token,
        user,
    }))
}
