use crate::api::error::ApiError;
use crate::error::AuditError;
use crate::models::{AppState, AuditRequest, AuditResponse};
use crate::utils::normalize_urls;
use axum::{extract::State, Json};
use log::info;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub async fn run_audit_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AuditRequest>,
) -> Result<Json<AuditResponse>, ApiError> {
    let urls = normalize_urls(request.urls.as_slice());
    if urls.is_empty() {
        return Err(ApiError::bad_request("No URLs provided"));
    }
    info!("Received audit request for {} url(s)", urls.len());

    // Detached so a request timeout never interrupts a pass mid-flight. If
    // this handler is dropped, the guard cancels the batch, which stops at
    // the next pass boundary and releases its browser.
    let cancel = CancellationToken::new();
    let _abandon_on_drop = cancel.clone().drop_guard();
    let engine = state.engine.clone();
    let results = tokio::spawn(async move { engine.run_batch(urls.as_slice(), &cancel).await })
        .await
        .map_err(|e| AuditError::Task(e.to_string()))??;

    Ok(Json(AuditResponse { results }))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
