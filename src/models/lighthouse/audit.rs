use serde::{Deserialize, Serialize};

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Audit {
    pub score: Option<f64>,
    #[serde(rename = "numericValue")]
    pub numeric_value: Option<f64>,
}
