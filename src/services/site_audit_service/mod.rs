// src/services/site_audit_service/mod.rs

pub mod browser;
pub mod compute;
pub mod engine;
pub mod lighthouse;
pub mod passes;

#[cfg(test)]
pub mod testing;

pub use browser::ChromeLauncher;
pub use engine::AuditEngine;
pub use lighthouse::{LighthouseCli, MeasurementAdapter};
pub use passes::DEFAULT_PASS_COUNT;
