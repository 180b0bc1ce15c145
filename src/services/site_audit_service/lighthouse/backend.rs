use crate::error::AuditError;
use crate::models::Lhr;
use crate::services::site_audit_service::lighthouse::settings::AuditSettings;
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use uuid::Uuid;

/// What one Lighthouse run hands back: the parsed result and the HTML report.
#[derive(Debug, Clone)]
pub struct RunnerResult {
    pub lhr: Lhr,
    pub report_html: String,
}

/// The external audit tool, driven against an already running browser.
#[async_trait]
pub trait MeasurementBackend: Send + Sync {
    async fn measure(
        &self,
        port: u16,
        url: &str,
        settings: &AuditSettings,
    ) -> Result<RunnerResult, AuditError>;
}

/// Runs the `lighthouse` executable and reads back its JSON and HTML output.
pub struct LighthouseCli {
    bin: PathBuf,
    scratch_dir: PathBuf,
}

impl LighthouseCli {
    pub fn new(bin: impl Into<PathBuf>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            scratch_dir: scratch_dir.into(),
        }
    }

    pub fn command_args(
        url: &str,
        port: u16,
        settings: &AuditSettings,
        output_base: &Path,
    ) -> Vec<String> {
        let mut args = vec![
            url.to_string(),
            format!("--port={}", port),
            "--output=json".to_string(),
            "--output=html".to_string(),
            format!("--output-path={}", output_base.display()),
            "--no-enable-error-reporting".to_string(),
            "--quiet".to_string(),
        ];
        args.extend(settings.cli_args());
        args
    }
}

#[async_trait]
impl MeasurementBackend for LighthouseCli {
    async fn measure(
        &self,
        port: u16,
        url: &str,
        settings: &AuditSettings,
    ) -> Result<RunnerResult, AuditError> {
        let base = self.scratch_dir.join(format!("lhr-{}", Uuid::new_v4()));
        let json_path = with_suffix(&base, ".report.json");
        let html_path = with_suffix(&base, ".report.html");

        let output = Command::new(&self.bin)
            .args(Self::command_args(url, port, settings, &base))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| AuditError::Measurement(format!("{}: {}", self.bin.display(), e)))?;

        let outcome = if output.status.success() {
            read_outputs(&json_path, &html_path).await
        } else {
            Err(AuditError::Measurement(format!(
                "lighthouse exited with {}: {}",
                output.status,
                last_line(&String::from_utf8_lossy(&output.stderr))
            )))
        };

        for path in [&json_path, &html_path] {
            if let Err(e) = tokio::fs::remove_file(path).await {
                debug!("Could not remove scratch file {}: {}", path.display(), e);
            }
        }

        outcome
    }
}

async fn read_outputs(json_path: &Path, html_path: &Path) -> Result<RunnerResult, AuditError> {
    let json = tokio::fs::read(json_path)
        .await
        .map_err(|e| AuditError::Measurement(format!("missing JSON report: {}", e)))?;
    let report_html = tokio::fs::read_to_string(html_path)
        .await
        .map_err(|e| AuditError::Measurement(format!("missing HTML report: {}", e)))?;

    Ok(RunnerResult {
        lhr: serde_json::from_slice(&json)?,
        report_html,
    })
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

fn last_line(stderr: &str) -> &str {
    stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no output")
}
