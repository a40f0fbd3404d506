use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Name reported by the root liveness sentinel.
pub const APP_NAME: &str = "factory-labour-logger";

/// Root sentinel payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub app: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Liveness: always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database answered `SELECT 1`.
    pub db_healthy: bool,
}

/// GET / -- liveness sentinel.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        app: APP_NAME,
    })
}

/// GET /health -- liveness plus a database probe.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = labourlog_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Public liveness routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
