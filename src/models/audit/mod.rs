pub mod device;
pub mod result;
pub mod sample;

pub use device::DeviceProfile;
pub use result::AggregateResult;
pub use sample::{CategoryScores, Sample, TimingMetrics};
