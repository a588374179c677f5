/// Liveness probe for the Roster server
use axum::Json;
use serde::Serialize;

/// Reports the running build so deployments can be told apart
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /api/health
/// Answers 200 while the process is up; does not touch the database
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
