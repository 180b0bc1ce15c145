use crate::error::AuditError;
use crate::models::{AggregateResult, DeviceProfile};
use crate::services::site_audit_service::browser::{BrowserLauncher, BrowserSession};
use crate::services::site_audit_service::compute::compute_averages;
use crate::services::site_audit_service::lighthouse::MeasurementAdapter;
use crate::services::site_audit_service::passes::run_passes;
use crate::utils::normalize_urls;
use futures::FutureExt;
use log::{info, warn};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Audits every submitted URL on every device profile through one browser
/// per batch.
pub struct AuditEngine {
    launcher: Arc<dyn BrowserLauncher>,
    adapter: MeasurementAdapter,
    pass_count: usize,
    // one batch at a time owns the browser and the backend
    batch_lock: Mutex<()>,
}

impl AuditEngine {
    pub fn new(
        launcher: Arc<dyn BrowserLauncher>,
        adapter: MeasurementAdapter,
        pass_count: usize,
    ) -> Self {
        Self {
            launcher,
            adapter,
            pass_count,
            batch_lock: Mutex::new(()),
        }
    }

    /// Results come back in url-major, mobile-then-desktop order. Pairs
    /// where every pass failed are left out.
    ///
    /// When `cancel` fires the batch stops at the next pass boundary, releases
    /// its browser and returns `Cancelled`.
    pub async fn run_batch<S: AsRef<str>>(
        &self,
        urls: &[S],
        cancel: &CancellationToken,
    ) -> Result<Vec<AggregateResult>, AuditError> {
        let urls = normalize_urls(urls);
        if urls.is_empty() {
            return Err(AuditError::Validation("No URLs provided".to_string()));
        }

        let _guard = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(AuditError::Cancelled),
            guard = self.batch_lock.lock() => guard,
        };
        let batch_id = Uuid::new_v4();
        info!(
            "[{}] Starting audit of {} url(s) x {} device(s), {} passes each",
            batch_id,
            urls.len(),
            DeviceProfile::ALL.len(),
            self.pass_count
        );

        let mut session = self.launcher.launch().await?;
        // a panicking pass must not skip the release below
        let pairs = self.audit_pairs(batch_id, session.as_mut(), &urls, cancel);
        let outcome = AssertUnwindSafe(pairs).catch_unwind().await;

        if let Err(e) = session.close().await {
            warn!("[{}] Browser did not shut down cleanly: {}", batch_id, e);
        }

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(payload) => panic::resume_unwind(payload),
        };

        match &outcome {
            Ok(results) => {
                let requested = urls.len() * DeviceProfile::ALL.len();
                info!(
                    "[{}] Audit finished: {} of {} pair(s) reported, {} skipped",
                    batch_id,
                    results.len(),
                    requested,
                    requested - results.len()
                );
            }
            Err(AuditError::Cancelled) => {
                warn!("[{}] Batch abandoned by the caller, browser released", batch_id);
            }
            Err(_) => {}
        }
        outcome
    }

    async fn audit_pairs(
        &self,
        batch_id: Uuid,
        session: &mut dyn BrowserSession,
        urls: &[String],
        cancel: &CancellationToken,
    ) -> Result<Vec<AggregateResult>, AuditError> {
        let mut results = Vec::new();

        for url in urls {
            for device in DeviceProfile::ALL {
                if cancel.is_cancelled() {
                    return Err(AuditError::Cancelled);
                }
                session.ensure_alive()?;

                let samples = run_passes(
                    &self.adapter,
                    batch_id,
                    session.port(),
                    url,
                    device,
                    self.pass_count,
                    cancel,
                )
                .await;
                if cancel.is_cancelled() {
                    return Err(AuditError::Cancelled);
                }

                match compute_averages(url, device, &samples) {
                    Some(result) => results.push(result),
                    None => warn!(
                        "[{}] Skipping {} ({}): no successful pass",
                        batch_id, url, device
                    ),
                }
            }
        }

        Ok(results)
    }
}
