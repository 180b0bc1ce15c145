pub mod file_utils;
pub mod log_utils;
pub mod url_utils;

pub use file_utils::ArtifactStore;
pub use log_utils::init_tracing;
pub use url_utils::normalize_urls;
