use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `log` records emitted by the audit
/// engine are bridged into it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
