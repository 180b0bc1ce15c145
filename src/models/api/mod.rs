pub mod params;

pub use params::{AuditRequest, AuditResponse, ErrorBody};
