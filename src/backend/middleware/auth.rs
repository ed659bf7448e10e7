/**
 * Authentication Gate
 *
 * `AuthUser` is an axum extractor for protected routes. It reads the
 * `Authorization: Bearer <token>` header, verifies the token, and hands the
 * caller's user id to the handler, which passes it on explicitly to the
 * domain service. Any failure rejects the request with `401`.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Identity proven by a valid bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Pull the raw token out of the `Authorization` header
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("missing authorization header")
        })?
        .to_str()
        .map_err(|_| ApiError::unauthorized("invalid authorization header"))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            ApiError::unauthorized("invalid authorization header format")
        })
}

/// Validate a token and return the user id it was issued for
pub fn authenticate(tokens: &TokenService, headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let token = bearer_token(headers)?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("invalid or expired token")
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::unauthorized("invalid or expired token")
    })?;

    Ok(AuthUser { user_id })
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        authenticate(state.auth.tokens(), &parts.headers)
    }
}
