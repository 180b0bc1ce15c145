use crate::models::audit::device::DeviceProfile;
use crate::models::audit::sample::{CategoryScores, TimingMetrics};
use serde::{Deserialize, Serialize};

/// Mean and standard deviation of every score and metric for one
/// (url, device) pair, with one report link per successful pass.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub url: String,
    pub device: DeviceProfile,
    pub average_scores: CategoryScores,
    pub std_scores: CategoryScores,
    pub average_metrics: TimingMetrics,
    pub std_metrics: TimingMetrics,
    pub reports: Vec<String>,
}
