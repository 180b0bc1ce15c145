pub mod chrome;

use crate::error::AuditError;
use async_trait::async_trait;

pub use chrome::ChromeLauncher;

/// Starts the browser process shared by every pass of one batch.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, AuditError>;
}

/// A running browser exposing a remote debugging port.
///
/// `close` consumes the session, so a handle can only be released once.
#[async_trait]
pub trait BrowserSession: Send {
    fn port(&self) -> u16;

    /// Fails with `BrowserLost` once the process has exited.
    fn ensure_alive(&mut self) -> Result<(), AuditError>;

    async fn close(self: Box<Self>) -> Result<(), AuditError>;
}
