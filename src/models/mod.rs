// src/models/mod.rs

pub mod api;
pub mod app;
pub mod audit;
pub mod lighthouse;

pub use api::{AuditRequest, AuditResponse, ErrorBody};
pub use app::AppState;
pub use audit::{AggregateResult, CategoryScores, DeviceProfile, Sample, TimingMetrics};
pub use lighthouse::{Categories, Category, Lhr, ScoreStats};
