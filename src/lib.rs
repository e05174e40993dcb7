//! Helpers for poking at object-storage buckets and eyeballing classifier
//! output: list a bucket, build `s3://` locators, upload a table as CSV and
//! draw a ROC curve.

pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

pub use error::{Error, Result};
pub use handlers::{
    ChartRenderer, Renderer, RocFigure, export_table, render_roc_curve, reveal_first_key,
};
pub use models::{
    BinaryLabel, ExportOptions, RocCurve, StoreConfig, Table, ToDelimited, auc, roc_curve,
};
pub use utils::{
    BucketConnector, MemoryConnector, S3Connector, checked_s3_uri, initialize_logger, s3_uri,
};
