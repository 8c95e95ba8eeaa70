//! Liveness check for the booking service

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// `status` is always `"ok"`; `module` names the binary and `version` is the
/// crate version it was built from
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Process liveness only; database reachability is not checked.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "fyyur-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
