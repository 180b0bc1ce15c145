//! Fakes for the browser and Lighthouse seams, shared by unit tests.

use crate::error::AuditError;
use crate::models::{DeviceProfile, Lhr};
use crate::services::site_audit_service::browser::{BrowserLauncher, BrowserSession};
use crate::services::site_audit_service::lighthouse::backend::{MeasurementBackend, RunnerResult};
use crate::services::site_audit_service::lighthouse::settings::AuditSettings;
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const FAKE_PORT: u16 = 9222;

/// A result with every category and metric present; only performance varies.
pub fn lhr_fixture(performance: f64) -> Lhr {
    serde_json::from_value(json!({
        "requestedUrl": "https://example.com/",
        "categories": {
            "performance": { "score": performance },
            "seo": { "score": 1.0 },
            "accessibility": { "score": 0.95 },
            "best-practices": { "score": 0.96 }
        },
        "audits": {
            "first-contentful-paint": { "score": 0.9, "numericValue": 1200.0 },
            "largest-contentful-paint": { "score": 0.8, "numericValue": 2500.0 },
            "total-blocking-time": { "score": 0.9, "numericValue": 150.0 },
            "speed-index": { "score": 0.9, "numericValue": 1800.0 },
            "cumulative-layout-shift": { "score": 1.0, "numericValue": 0.05 }
        }
    }))
    .expect("fixture is valid")
}

#[derive(Debug, Clone)]
pub struct BackendCall {
    pub port: u16,
    pub url: String,
    pub form_factor: DeviceProfile,
    pub screen_emulation_disabled: bool,
}

/// Plays back one outcome per call: `Ok(performance)` or `Err(message)`.
/// Once the script runs out every call succeeds with performance 0.9.
pub struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<f64, String>>>,
    calls: Mutex<Vec<BackendCall>>,
    delay: Option<Duration>,
    cancel_after: Option<(usize, CancellationToken)>,
}

impl ScriptedBackend {
    pub fn new(outcomes: Vec<Result<f64, String>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
            delay: None,
            cancel_after: None,
        }
    }

    pub fn always_ok() -> Self {
        Self::new(Vec::new())
    }

    /// Every pass takes `delay` before it answers.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fires `token` as soon as call number `calls` has started.
    pub fn cancel_after(mut self, calls: usize, token: CancellationToken) -> Self {
        self.cancel_after = Some((calls, token));
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeasurementBackend for ScriptedBackend {
    async fn measure(
        &self,
        port: u16,
        url: &str,
        settings: &AuditSettings,
    ) -> Result<RunnerResult, AuditError> {
        let started = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(BackendCall {
                port,
                url: url.to_string(),
                form_factor: settings.form_factor,
                screen_emulation_disabled: settings.screen_emulation_disabled,
            });
            calls.len()
        };
        if let Some((after, token)) = &self.cancel_after {
            if started == *after {
                token.cancel();
            }
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = self.outcomes.lock().unwrap().pop_front().unwrap_or(Ok(0.9));
        match outcome {
            Ok(performance) => Ok(RunnerResult {
                lhr: lhr_fixture(performance),
                report_html: format!("<html>{}</html>", url),
            }),
            Err(message) => Err(AuditError::Measurement(message)),
        }
    }
}

/// Blows up inside the measurement call.
pub struct PanickingBackend;

#[async_trait]
impl MeasurementBackend for PanickingBackend {
    async fn measure(
        &self,
        _port: u16,
        url: &str,
        _settings: &AuditSettings,
    ) -> Result<RunnerResult, AuditError> {
        panic!("lighthouse crashed while auditing {}", url);
    }
}

/// Counts launches and releases. The session can be told to die after a
/// number of liveness checks.
#[derive(Default)]
pub struct FakeLauncher {
    launches: AtomicUsize,
    closes: Arc<AtomicUsize>,
    fail_launch: bool,
    alive_checks: Option<usize>,
}

impl FakeLauncher {
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn unlaunchable() -> Self {
        Self {
            fail_launch: true,
            ..Self::default()
        }
    }

    pub fn dies_after(alive_checks: usize) -> Self {
        Self {
            alive_checks: Some(alive_checks),
            ..Self::default()
        }
    }

    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BrowserLauncher for FakeLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, AuditError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        if self.fail_launch {
            return Err(AuditError::BrowserLaunch("chrome not installed".into()));
        }
        Ok(Box::new(FakeSession {
            checks: 0,
            alive_checks: self.alive_checks,
            closes: self.closes.clone(),
        }))
    }
}

struct FakeSession {
    checks: usize,
    alive_checks: Option<usize>,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl BrowserSession for FakeSession {
    fn port(&self) -> u16 {
        FAKE_PORT
    }

    fn ensure_alive(&mut self) -> Result<(), AuditError> {
        self.checks += 1;
        match self.alive_checks {
            Some(limit) if self.checks > limit => {
                Err(AuditError::BrowserLost("chrome exited with signal 9".into()))
            }
            _ => Ok(()),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), AuditError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
