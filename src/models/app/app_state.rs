use crate::services::AuditEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AuditEngine>,
}
