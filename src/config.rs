use crate::services::site_audit_service::DEFAULT_PASS_COUNT;
use anyhow::{bail, Context, Result};
use log::warn;
use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

const CHROME_CANDIDATES: [&str; 4] = [
    "google-chrome-stable",
    "google-chrome",
    "chromium",
    "chromium-browser",
];

/// Runtime settings, read from the environment (and `.env`) at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    pub reports_dir: PathBuf,
    pub public_dir: PathBuf,
    pub pass_count: usize,
    pub request_timeout: Duration,
    pub chrome_path: PathBuf,
    pub lighthouse_bin: PathBuf,
    pub browser_startup_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pass_count: usize = parse_or(&lookup, "LIGHTAVG_PASS_COUNT", DEFAULT_PASS_COUNT)?;
        if pass_count == 0 {
            bail!("LIGHTAVG_PASS_COUNT must be at least 1");
        }

        Ok(Self {
            bind: parse_or(&lookup, "LIGHTAVG_BIND", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            reports_dir: lookup("LIGHTAVG_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("reports")),
            public_dir: lookup("LIGHTAVG_PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            pass_count,
            request_timeout: Duration::from_secs(parse_or(
                &lookup,
                "LIGHTAVG_REQUEST_TIMEOUT_SECS",
                330,
            )?),
            chrome_path: resolve_chrome(&lookup),
            lighthouse_bin: lookup("LIGHTAVG_LIGHTHOUSE_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("lighthouse")),
            browser_startup_timeout: Duration::from_secs(parse_or(
                &lookup,
                "LIGHTAVG_BROWSER_STARTUP_SECS",
                30,
            )?),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

fn resolve_chrome<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup("LIGHTAVG_CHROME_PATH").or_else(|| lookup("CHROME_PATH")) {
        return PathBuf::from(path);
    }
    for candidate in CHROME_CANDIDATES {
        if let Ok(path) = which::which(candidate) {
            return path;
        }
    }
    warn!("No Chrome binary found on PATH; set LIGHTAVG_CHROME_PATH");
    PathBuf::from(CHROME_CANDIDATES[1])
}
