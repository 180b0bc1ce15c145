pub mod site_audit_service;

pub use site_audit_service::{AuditEngine, ChromeLauncher, LighthouseCli, MeasurementAdapter};
