//! HTTP route handlers.

pub mod health;
pub mod metrics;
pub mod root;

use axum::http::Uri;
use common::AppVersion;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: AppVersion,
}

impl AppState {
    pub fn new(version: AppVersion) -> Self {
        Self { version }
    }
}

/// Fallback for paths without a route.
pub async fn not_found(uri: Uri) -> ApiError {
    ::metrics::counter!("http_requests_not_found_total").increment(1);
    tracing::debug!(path = %uri.path(), "no route matched");
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
