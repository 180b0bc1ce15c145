// src/api/mod.rs

pub mod error;
pub mod handler;

use handler::{health_handler, run_audit_handler};

use crate::models::AppState;
use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::{path::Path, sync::Arc, time::Duration};
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

pub fn router(
    state: Arc<AppState>,
    reports_dir: &Path,
    public_dir: &Path,
    request_timeout: Duration,
) -> Router {
    Router::new()
        .route("/audit", post(run_audit_handler))
        .route("/health", get(health_handler))
        .nest_service("/reports", ServeDir::new(reports_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
