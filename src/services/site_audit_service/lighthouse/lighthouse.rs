use crate::error::AuditError;
use crate::models::{
    Categories, Category, CategoryScores, DeviceProfile, Lhr, Sample, TimingMetrics,
};
use crate::services::site_audit_service::lighthouse::backend::MeasurementBackend;
use crate::services::site_audit_service::lighthouse::settings::AuditSettings;
use crate::utils::ArtifactStore;
use std::sync::Arc;

const FCP: &str = "first-contentful-paint";
const LCP: &str = "largest-contentful-paint";
const TBT: &str = "total-blocking-time";
const SPEED_INDEX: &str = "speed-index";
const CLS: &str = "cumulative-layout-shift";

/// Runs a single pass against the shared browser and stores its report.
pub struct MeasurementAdapter {
    backend: Arc<dyn MeasurementBackend>,
    store: ArtifactStore,
}

impl MeasurementAdapter {
    pub fn new(backend: Arc<dyn MeasurementBackend>, store: ArtifactStore) -> Self {
        Self { backend, store }
    }

    /// `port` is the debugging port of the browser opened for the batch.
    pub async fn run_pass(
        &self,
        port: u16,
        url: &str,
        device: DeviceProfile,
        pass: usize,
    ) -> Result<Sample, AuditError> {
        let settings = AuditSettings::for_device(device);
        let result = self.backend.measure(port, url, &settings).await?;

        let (scores, metrics) = extract_measurements(&result.lhr)?;
        let report = self
            .store
            .save_report(url, device, pass, &result.report_html)
            .await?;

        Ok(Sample {
            scores,
            metrics,
            report,
        })
    }
}

/// Pulls the four category scores (scaled to 0..=100) and five timing
/// metrics out of a Lighthouse result. Any missing value fails the pass.
pub fn extract_measurements(lhr: &Lhr) -> Result<(CategoryScores, TimingMetrics), AuditError> {
    if let Some(runtime_error) = &lhr.runtime_error {
        return Err(AuditError::Measurement(format!(
            "{}: {}",
            runtime_error.code, runtime_error.message
        )));
    }

    let categories = &lhr.categories;
    let scores = CategoryScores {
        performance: category_score(categories, "performance", |c| &c.performance)?,
        seo: category_score(categories, "seo", |c| &c.seo)?,
        accessibility: category_score(categories, "accessibility", |c| &c.accessibility)?,
        best_practices: category_score(categories, "best-practices", |c| &c.best_practices)?,
    };

    let metrics = TimingMetrics {
        fcp: numeric_value(lhr, FCP)?,
        lcp: numeric_value(lhr, LCP)?,
        tbt: numeric_value(lhr, TBT)?,
        si: numeric_value(lhr, SPEED_INDEX)?,
        cls: numeric_value(lhr, CLS)?,
    };

    Ok((scores, metrics))
}

fn category_score(
    categories: &Categories,
    name: &str,
    pick: fn(&Categories) -> &Option<Category>,
) -> Result<f64, AuditError> {
    pick(categories)
        .as_ref()
        .and_then(|category| category.score)
        .map(|score| score * 100.0)
        .ok_or_else(|| AuditError::Measurement(format!("no {} score in result", name)))
}

fn numeric_value(lhr: &Lhr, audit: &str) -> Result<f64, AuditError> {
    lhr.audits
        .get(audit)
        .and_then(|a| a.numeric_value)
        .ok_or_else(|| AuditError::Measurement(format!("no {} value in result", audit)))
}
