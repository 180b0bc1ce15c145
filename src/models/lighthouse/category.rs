use serde::{Deserialize, Serialize};

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Category {
    pub score: Option<f64>,
}

// pub struct for Lighthouse categories
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Categories {
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
    pub seo: Option<Category>,
}
