use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

mod api;
mod config;
mod error;
mod models;
mod services;
mod utils;

use config::AppConfig;
use models::AppState;
use services::{AuditEngine, ChromeLauncher, LighthouseCli, MeasurementAdapter};
use utils::ArtifactStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    utils::init_tracing();

    let config = AppConfig::from_env()?;
    tokio::fs::create_dir_all(&config.reports_dir)
        .await
        .with_context(|| format!("Failed to create {}", config.reports_dir.display()))?;

    let launcher = ChromeLauncher::new(&config.chrome_path, config.browser_startup_timeout);
    let backend = LighthouseCli::new(&config.lighthouse_bin, std::env::temp_dir());
    let adapter = MeasurementAdapter::new(
        Arc::new(backend),
        ArtifactStore::new(&config.reports_dir, "/reports"),
    );
    let engine = AuditEngine::new(Arc::new(launcher), adapter, config.pass_count);
    let shared_state = Arc::new(AppState {
        engine: Arc::new(engine),
    });

    let app = api::router(
        shared_state,
        &config.reports_dir,
        &config.public_dir,
        config.request_timeout,
    );

    info!(
        "Using {} and {}, {} passes per device",
        config.chrome_path.display(),
        config.lighthouse_bin.display(),
        config.pass_count
    );
    info!("🚀 Server running on http://{}", config.bind);

    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
