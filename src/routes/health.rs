use axum::Json;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status ("ok" — the gateway holds no state that can degrade)
    pub status: String,
    /// API version
    pub version: String,
    /// Current server time (ISO 8601, UTC)
    pub timestamp: String,
}

/// Health check endpoint.
///
/// The gateway is stateless (no database, no cache), so liveness is the
/// only thing to report; upstream reachability is observed per-request.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
