//! Greeting endpoint.

use std::sync::Arc;

use axum::extract::State;

use super::AppState;

/// Literal every greeting starts with; deployment checks grep for it.
pub const GREETING: &str = "GitOps Pipeline Working";

/// Renders the greeting for a version label.
pub fn greeting(version: &str) -> String {
    format!("{GREETING}! Version: {version}")
}

/// GET / — returns the plain-text greeting with the running version.
#[tracing::instrument(skip(state))]
pub async fn index(State(state): State<Arc<AppState>>) -> String {
    metrics::counter!("http_requests_total", "route" => "/").increment(1);
    greeting(state.version.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_contains_marker_and_version() {
        let body = greeting("1.0");
        assert!(body.contains(GREETING));
        assert!(body.ends_with("Version: 1.0"));
    }
}
