use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The subset of a Lighthouse result (LHR) the engine reads.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Lhr {
    pub requested_url: Option<String>,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
    pub runtime_error: Option<RuntimeError>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RuntimeError {
    pub code: String,
    pub message: String,
}
