//! Liveness probe

use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
