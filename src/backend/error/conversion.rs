/**
 * Error Conversion
 *
 * Conversions into `ApiError` from the layers below it, and the
 * `IntoResponse` implementation that renders it.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "post not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::ApiError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal(detail) = &self {
            tracing::error!("Internal error: {}", detail);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<SharedError> for ApiError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::BadRequest(message),
        }
    }
}

/// Unparseable bodies, wrong content type, and missing fields are all 400s
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(_) => Self::Conflict("username or email already exists".to_string()),
            StoreError::MissingReference(detail) => {
                tracing::warn!("Write referenced a missing row: {}", detail);
                Self::NotFound("referenced resource not found".to_string())
            }
            StoreError::Backend(detail) => Self::Internal(detail),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_error_renders_json_body() {
        let response = ApiError::forbidden("not your post").into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not your post");
        assert_eq!(body["status"], 403);
    }

    #[test]
    fn test_from_shared_error() {
        let error: ApiError = SharedError::validation("title", "title is required").into();
        assert_eq!(error, ApiError::BadRequest("title is required".to_string()));
    }

    #[test]
    fn test_from_store_error() {
        let conflict: ApiError = StoreError::Conflict("users_email_key".into()).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let missing: ApiError = StoreError::MissingReference("posts.id".into()).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let backend: ApiError = StoreError::Backend("pool timed out".into()).into();
        assert_eq!(backend.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
