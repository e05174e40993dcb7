pub mod config;
pub mod roc;
pub mod table;

// Re-exports for convenience
pub use config::StoreConfig;
pub use roc::{BinaryLabel, RocCurve, auc, roc_curve};
pub use table::{ExportOptions, Table, ToDelimited};
