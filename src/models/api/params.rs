use crate::models::audit::AggregateResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuditResponse {
    pub results: Vec<AggregateResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
