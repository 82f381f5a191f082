//! Logging and metrics setup.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogFormat;
use crate::error::ServerError;

/// Directive used when the configured one does not parse.
const FALLBACK_DIRECTIVE: &str = "info";

/// Builds the log filter from the configured directive, falling back to `info`.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_DIRECTIVE))
}

/// Installs the global tracing subscriber filtered by `directive`.
pub fn init_tracing(directive: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(env_filter(directive));

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(false))
            .init(),
    }
}

/// Installs the Prometheus recorder and returns a handle for rendering.
pub fn install_metrics_recorder() -> Result<PrometheusHandle, ServerError> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directive_is_used() {
        assert_eq!(env_filter("debug").to_string(), "debug");
    }

    #[test]
    fn invalid_directive_falls_back_to_info() {
        assert_eq!(env_filter("api=notalevel").to_string(), "info");
    }
}
