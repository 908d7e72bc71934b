//! Health and test handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::server::AppState;

/// Response for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /api/health - Store connectivity check.
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                service: "upi-bridge",
                version: env!("CARGO_PKG_VERSION"),
                database: "connected",
            }),
        ),
        Err(e) => {
            error!(error = %e, "health check failed to reach database");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "error",
                    service: "upi-bridge",
                    version: env!("CARGO_PKG_VERSION"),
                    database: "disconnected",
                }),
            )
        }
    }
}

/// GET /api/test - Liveness echo with a server timestamp.
pub async fn test_echo() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "upi-bridge test endpoint",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
