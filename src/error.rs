use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while running an audit batch.
///
/// `Measurement`, `Artifact` and `Json` only ever describe a single pass and
/// are contained by the pass runner. The browser variants end the batch.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("{0}")]
    Validation(String),

    #[error("measurement failed: {0}")]
    Measurement(String),

    #[error("failed to launch browser: {0}")]
    BrowserLaunch(String),

    #[error("browser is no longer running: {0}")]
    BrowserLost(String),

    #[error("failed to write report {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lighthouse result: {0}")]
    Json(#[from] serde_json::Error),

    #[error("audit task aborted: {0}")]
    Task(String),

    #[error("batch abandoned by the caller")]
    Cancelled,
}

impl AuditError {
    /// True for errors scoped to one measurement pass.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AuditError::Measurement(_) | AuditError::Artifact { .. } | AuditError::Json(_)
        )
    }
}
