use crate::models::ScoreStats;

/// Arithmetic mean and population standard deviation of `values`.
/// Returns `None` for an empty slice.
pub fn compute_score_stats(values: &[f64]) -> Option<ScoreStats> {
    if values.is_empty() {
        return None;
    }

    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count;

    Some(ScoreStats {
        mean,
        std_dev: variance.sqrt(),
    })
}
