pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::directory_service::DirectoryService;
pub use app::seed::SeedData;
pub use domain::{DirectoryError, FilterCriteria, Restaurant, Review};
pub use infra::config::Config;
