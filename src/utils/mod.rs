pub mod locator;
pub mod logging;
pub mod store;

// Re-exports for convenience
pub use locator::{checked_s3_uri, s3_uri};
pub use logging::initialize_logger;
pub use store::{BucketConnector, MemoryConnector, S3Connector};
