//! Language Detection Server Binary

use std::sync::Arc;

use anyhow::{Context, Result};
use lang_detect_service::{
    config::AppConfig,
    logging::init_logging,
    server::{build_router, shutdown_signal, AppState},
    MultiDetector,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::from_env().context("failed to load configuration")?;

    init_logging(config.to_log_config())?;

    if config.uses_dev_secret() {
        tracing::warn!("SESSION_SECRET not set, using the development fallback key");
    }

    let detector = MultiDetector::new(&config.detection);
    let state = Arc::new(AppState::new(detector, &config));
    let app = build_router(state, &config);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Starting Language Detection API on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
