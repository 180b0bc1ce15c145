use crate::error::AuditError;
use crate::models::DeviceProfile;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use url::Url;

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(
        |c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        "_",
    )
}

/// Builds report file names from the target host, the device and a
/// millisecond timestamp that never repeats within the process.
#[derive(Debug, Default)]
pub struct ReportNamer {
    last_millis: AtomicI64,
}

impl ReportNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_name(&self, url: &str, device: DeviceProfile, pass: usize) -> String {
        let host = Url::parse(url)
            .ok()
            .and_then(|parsed| parsed.host_str().map(str::to_string))
            .unwrap_or_else(|| url.to_string());

        format!(
            "report_{}_{}_{}_{}.html",
            sanitize_filename(&host),
            device,
            self.next_timestamp(),
            pass
        )
    }

    // Wall clock in ms, bumped past the previous value when two names land in
    // the same millisecond.
    fn next_timestamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_millis.load(Ordering::Acquire);
        loop {
            let next = now.max(last + 1);
            match self.last_millis.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next,
                Err(current) => last = current,
            }
        }
    }
}

/// Write-once store for HTML reports, exposed under `public_prefix`.
#[derive(Debug)]
pub struct ArtifactStore {
    dir: PathBuf,
    public_prefix: String,
    namer: ReportNamer,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.into(),
            namer: ReportNamer::new(),
        }
    }

    /// Writes the report and returns its public path.
    pub async fn save_report(
        &self,
        url: &str,
        device: DeviceProfile,
        pass: usize,
        html: &str,
    ) -> Result<String, AuditError> {
        let file_name = self.namer.next_name(url, device, pass);
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, html)
            .await
            .map_err(|source| AuditError::Artifact {
                path: path.clone(),
                source,
            })?;

        Ok(format!(
            "{}/{}",
            self.public_prefix.trim_end_matches('/'),
            file_name
        ))
    }
}
