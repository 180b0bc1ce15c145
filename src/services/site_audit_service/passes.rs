use crate::models::{DeviceProfile, Sample};
use crate::services::site_audit_service::lighthouse::MeasurementAdapter;
use log::{error, info, warn};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub const DEFAULT_PASS_COUNT: usize = 3;

/// Runs `pass_count` sequential passes for one (url, device) pair.
///
/// A failed pass is logged and left out; the others still run. The returned
/// samples may be empty, in which case the caller must not reduce them.
/// Once `cancel` fires no further pass is started; one already running is
/// allowed to finish.
pub async fn run_passes(
    adapter: &MeasurementAdapter,
    batch_id: Uuid,
    port: u16,
    url: &str,
    device: DeviceProfile,
    pass_count: usize,
    cancel: &CancellationToken,
) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(pass_count);

    for pass in 1..=pass_count {
        if cancel.is_cancelled() {
            warn!(
                "[{}] Batch abandoned before pass {}/{} for {} ({})",
                batch_id, pass, pass_count, url, device
            );
            break;
        }

        info!("[{}] Pass {}/{} for {} ({})", batch_id, pass, pass_count, url, device);
        match adapter.run_pass(port, url, device, pass).await {
            Ok(sample) => {
                info!(
                    "[{}] ✅ Pass {}/{} for {} ({}): performance {:.0}",
                    batch_id, pass, pass_count, url, device, sample.scores.performance
                );
                samples.push(sample);
            }
            Err(e) if e.is_recoverable() => {
                warn!(
                    "[{}] ❌ Pass {}/{} for {} ({}) failed: {}",
                    batch_id, pass, pass_count, url, device, e
                );
            }
            Err(e) => {
                error!(
                    "[{}] ❌ Pass {}/{} for {} ({}) failed: {}",
                    batch_id, pass, pass_count, url, device, e
                );
            }
        }
    }

    samples
}
