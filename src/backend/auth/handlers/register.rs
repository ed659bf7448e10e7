/**
 * Register Handler
 *
 * POST /api/register
 *
 * # Registration Process
 *
 * 1. Validate the payload (username, password of at least 6 chars, email)
 * 2. Reject a username or email that is already taken
 * 3. Hash the password with bcrypt and persist the user
 * 4. Return the public user fields
 *
 * The response never carries the password or its hash. Registration does
 * not log the user in; clients call `/api/login` afterwards.
 */
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

use crate::backend::auth::service::AuthService;
use crate::backend::error::ApiResult;
use crate::shared::{RegisterRequest, RegisterResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a field fails validation
/// * `409 Conflict` - Username or email already exists
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "secret1",
///   "email": "alice@example.com"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "message": "user registered successfully",
///   "user": {
///     "id": "01890a5d-ac96-774b-bcce-b302099a8057",
///     "username": "alice",
///     "email": "alice@example.com"
///   }
/// }
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;
    tracing::info!("Register request for: {}", request.username);

    let user = auth.register(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "user registered successfully".to_string(),
            user,
        }),
    ))
}
