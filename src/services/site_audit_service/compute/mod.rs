pub mod aggregate;
pub mod stats;

pub use aggregate::compute_averages;
