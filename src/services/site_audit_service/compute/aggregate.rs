use crate::models::{AggregateResult, CategoryScores, DeviceProfile, Sample, TimingMetrics};
use crate::services::site_audit_service::compute::stats::compute_score_stats;

/// Reduces the passes of one (url, device) pair. Returns `None` when no pass
/// succeeded so the pair can be left out instead of reported as NaN.
pub fn compute_averages(
    url: &str,
    device: DeviceProfile,
    samples: &[Sample],
) -> Option<AggregateResult> {
    let stat = |pick: fn(&Sample) -> f64| {
        let values: Vec<f64> = samples.iter().map(pick).collect();
        compute_score_stats(&values)
    };

    let performance = stat(|s| s.scores.performance)?;
    let seo = stat(|s| s.scores.seo)?;
    let accessibility = stat(|s| s.scores.accessibility)?;
    let best_practices = stat(|s| s.scores.best_practices)?;

    let fcp = stat(|s| s.metrics.fcp)?;
    let lcp = stat(|s| s.metrics.lcp)?;
    let tbt = stat(|s| s.metrics.tbt)?;
    let si = stat(|s| s.metrics.si)?;
    let cls = stat(|s| s.metrics.cls)?;

    Some(AggregateResult {
        url: url.to_string(),
        device,
        average_scores: CategoryScores {
            performance: performance.mean,
            seo: seo.mean,
            accessibility: accessibility.mean,
            best_practices: best_practices.mean,
        },
        std_scores: CategoryScores {
            performance: performance.std_dev,
            seo: seo.std_dev,
            accessibility: accessibility.std_dev,
            best_practices: best_practices.std_dev,
        },
        average_metrics: TimingMetrics {
            fcp: fcp.mean,
            lcp: lcp.mean,
            tbt: tbt.mean,
            si: si.mean,
            cls: cls.mean,
        },
        std_metrics: TimingMetrics {
            fcp: fcp.std_dev,
            lcp: lcp.std_dev,
            tbt: tbt.std_dev,
            si: si.std_dev,
            cls: cls.std_dev,
        },
        reports: samples.iter().map(|s| s.report.clone()).collect(),
    })
}
