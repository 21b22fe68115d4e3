//! Health check endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Whether the database answered a ping.
    pub database: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Health check handler.
///
/// Answers 503 when the database is unreachable so load balancers can act
/// on it.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let (status, code, database) = match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "up"),
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: code,
            database,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
