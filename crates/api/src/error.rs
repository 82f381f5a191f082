//! Error types for startup and HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` did not parse as a TCP port number.
    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// `LOG_FORMAT` named an unknown format.
    #[error("Invalid LOG_FORMAT value: {0:?} (expected \"pretty\" or \"json\")")]
    InvalidLogFormat(String),
}

/// Errors that abort the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install metrics recorder: {0}")]
    Metrics(String),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// No route matched the request path.
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
