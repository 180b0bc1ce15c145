use serde::{Deserialize, Serialize};

/// Category scores on a 0..=100 scale.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub performance: f64,
    pub seo: f64,
    pub accessibility: f64,
    pub best_practices: f64,
}

/// Timing metrics in milliseconds, except `cls` which is unitless.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct TimingMetrics {
    pub fcp: f64,
    pub lcp: f64,
    pub tbt: f64,
    pub si: f64,
    pub cls: f64,
}

/// Output of one successful measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub scores: CategoryScores,
    pub metrics: TimingMetrics,
    /// Public path of the stored HTML report, e.g. `/reports/report_x.html`.
    pub report: String,
}
