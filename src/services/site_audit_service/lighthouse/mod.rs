pub mod backend;
pub mod lighthouse;
pub mod settings;

pub use backend::LighthouseCli;
pub use lighthouse::MeasurementAdapter;
