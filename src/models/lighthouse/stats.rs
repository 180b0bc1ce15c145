use serde::{Deserialize, Serialize};

// pub struct to store sample statistics (mean, population std deviation)
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct ScoreStats {
    pub mean: f64,
    pub std_dev: f64,
}
