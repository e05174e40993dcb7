use log::debug;
use opendal::layers::LoggingLayer;
use opendal::{ErrorKind, Operator, services};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::StoreConfig;

/// Something that can hand out an [`Operator`] bound to a named bucket.
///
/// Operations take a connector instead of reaching for ambient global
/// clients, so tests can substitute [`MemoryConnector`].
pub trait BucketConnector {
    fn open(&self, bucket: &str) -> opendal::Result<Operator>;
}

/// Connects to S3 (or an S3-compatible endpoint).
///
/// Credentials are never passed in: opendal loads them from the environment
/// and the usual AWS profile files.
#[derive(Debug, Clone, Default)]
pub struct S3Connector {
    endpoint: Option<String>,
    region: Option<String>,
    root: Option<String>,
}

impl S3Connector {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            region: config.region.clone(),
            root: config.root.clone(),
        }
    }
}

impl BucketConnector for S3Connector {
    fn open(&self, bucket: &str) -> opendal::Result<Operator> {
        let mut builder = services::S3::default().bucket(bucket);
        if let Some(endpoint) = &self.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(region) = &self.region {
            builder = builder.region(region);
        }
        if let Some(root) = &self.root {
            builder = builder.root(root);
        }

        debug!(
            "Opening S3 bucket '{}' (endpoint={:?}, region={:?})",
            bucket, self.endpoint, self.region
        );
        Ok(Operator::new(builder)?
            .layer(LoggingLayer::default())
            .finish())
    }
}

/// In-process buckets backed by opendal's memory service.
///
/// Buckets must be registered with [`MemoryConnector::create_bucket`] before
/// they can be opened; opening anything else fails with `NotFound`, the same
/// way a missing S3 bucket does.
#[derive(Debug, Default)]
pub struct MemoryConnector {
    buckets: RwLock<HashMap<String, Operator>>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty bucket, or return the existing one.
    pub fn create_bucket(&self, bucket: &str) -> opendal::Result<Operator> {
        let mut buckets = self.buckets.write().map_err(|_| {
            opendal::Error::new(ErrorKind::Unexpected, "memory bucket registry poisoned")
        })?;
        if let Some(op) = buckets.get(bucket) {
            return Ok(op.clone());
        }
        let op = Operator::new(services::Memory::default())?.finish();
        buckets.insert(bucket.to_string(), op.clone());
        Ok(op)
    }
}

impl BucketConnector for MemoryConnector {
    fn open(&self, bucket: &str) -> opendal::Result<Operator> {
        let buckets = self.buckets.read().map_err(|_| {
            opendal::Error::new(ErrorKind::Unexpected, "memory bucket registry poisoned")
        })?;
        buckets.get(bucket).cloned().ok_or_else(|| {
            opendal::Error::new(ErrorKind::NotFound, "the specified bucket does not exist")
                .with_context("bucket", bucket)
        })
    }
}
