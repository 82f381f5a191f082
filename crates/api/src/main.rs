//! GitOps demo server entry point.

use std::sync::Arc;

use api::config::Config;
use api::error::ServerError;
use api::routes::AppState;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // 1. Load configuration
    let config = Config::from_env()?;

    // 2. Initialize tracing
    api::telemetry::init_tracing(&config.log_level, config.log_format);

    // 3. Install Prometheus metrics recorder
    let metrics_handle = api::telemetry::install_metrics_recorder()?;

    // 4. Build the application
    let state = Arc::new(AppState::new(config.version.clone()));
    let app = api::create_app(state, metrics_handle);

    // 5. Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, version = %config.version, "starting GitOps demo server");

    api::serve(listener, app, api::shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}
