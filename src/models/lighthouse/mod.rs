pub mod audit;
pub mod category;
pub mod report;
pub mod stats;

pub use category::{Categories, Category};
pub use report::Lhr;
pub use stats::ScoreStats;
