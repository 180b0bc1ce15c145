use crate::error::AuditError;
use crate::services::site_audit_service::browser::{BrowserLauncher, BrowserSession};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tempfile::TempDir;
use tokio::process::{Child, Command};
use tokio::time::{sleep, Instant};

const CHROME_FLAGS: [&str; 6] = [
    "--headless=new",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-setuid-sandbox",
    "--window-size=1920,1080",
];

const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct ChromeLauncher {
    chrome_path: PathBuf,
    startup_timeout: Duration,
    client: Client,
}

impl ChromeLauncher {
    pub fn new(chrome_path: impl Into<PathBuf>, startup_timeout: Duration) -> Self {
        Self {
            chrome_path: chrome_path.into(),
            startup_timeout,
            client: Client::new(),
        }
    }

    pub fn command_args(port: u16, profile_dir: &std::path::Path) -> Vec<String> {
        let mut args: Vec<String> = CHROME_FLAGS.iter().map(|f| f.to_string()).collect();
        args.push(format!("--remote-debugging-port={}", port));
        args.push(format!("--user-data-dir={}", profile_dir.display()));
        args.push("--no-first-run".to_string());
        args.push("about:blank".to_string());
        args
    }

    // Polls the DevTools version endpoint until Chrome answers.
    async fn wait_until_ready(&self, session: &mut ChromeSession) -> Result<(), AuditError> {
        let endpoint = format!("http://127.0.0.1:{}/json/version", session.port);
        let deadline = Instant::now() + self.startup_timeout;

        loop {
            session
                .ensure_alive()
                .map_err(|e| AuditError::BrowserLaunch(e.to_string()))?;

            match self.client.get(&endpoint).send().await {
                Ok(response) if response.status().is_success() => return Ok(()),
                Ok(response) => debug!("DevTools endpoint answered {}", response.status()),
                Err(e) => debug!("DevTools endpoint not ready: {}", e),
            }

            if Instant::now() >= deadline {
                return Err(AuditError::BrowserLaunch(format!(
                    "debugging port {} not ready after {:?}",
                    session.port, self.startup_timeout
                )));
            }
            sleep(READY_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl BrowserLauncher for ChromeLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, AuditError> {
        let port = free_port()?;
        let profile = tempfile::Builder::new()
            .prefix("lightavg-chrome-")
            .tempdir()
            .map_err(|e| AuditError::BrowserLaunch(format!("profile directory: {}", e)))?;

        let child = Command::new(&self.chrome_path)
            .args(Self::command_args(port, profile.path()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                AuditError::BrowserLaunch(format!("{}: {}", self.chrome_path.display(), e))
            })?;

        let mut session = ChromeSession {
            child,
            port,
            _profile: profile,
        };

        if let Err(e) = self.wait_until_ready(&mut session).await {
            let _ = Box::new(session).close().await;
            return Err(e);
        }

        info!("Chrome ready on debugging port {}", port);
        Ok(Box::new(session))
    }
}

pub struct ChromeSession {
    child: Child,
    port: u16,
    // removed from disk on drop
    _profile: TempDir,
}

#[async_trait]
impl BrowserSession for ChromeSession {
    fn port(&self) -> u16 {
        self.port
    }

    fn ensure_alive(&mut self) -> Result<(), AuditError> {
        match self.child.try_wait() {
            Ok(None) => Ok(()),
            Ok(Some(status)) => Err(AuditError::BrowserLost(format!(
                "chrome exited with {}",
                status
            ))),
            Err(e) => Err(AuditError::BrowserLost(e.to_string())),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), AuditError> {
        let mut session = *self;
        if let Ok(Some(_)) = session.child.try_wait() {
            return Ok(());
        }
        session
            .child
            .kill()
            .await
            .map_err(|e| AuditError::BrowserLost(format!("failed to stop chrome: {}", e)))?;
        info!("Chrome on port {} stopped", session.port);
        Ok(())
    }
}

fn free_port() -> Result<u16, AuditError> {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .map_err(|e| AuditError::BrowserLaunch(format!("no free debugging port: {}", e)))
}
