//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::AppVersion;
use serde::Serialize;

use super::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: AppVersion,
}

/// GET /health — returns liveness status and the running version.
#[tracing::instrument(skip(state))]
pub async fn check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    metrics::counter!("http_requests_total", "route" => "/health").increment(1);
    Json(HealthResponse {
        status: "healthy",
        version: state.version.clone(),
    })
}
