use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::ExportOptions;
use crate::utils::{S3Connector, initialize_logger};

const ENV_PREFIX: &str = "BUCKETKIT";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    pub endpoint: Option<String>, // S3-compatible endpoint, AWS default if unset
    pub region: Option<String>,
    pub root: Option<String>, // Key prefix every operation is relative to
    pub log_path: Option<PathBuf>,
    log_level: Option<String>,
    export_path: Option<String>, // Destination key used when none is given
    plot_height: Option<u16>,    // Rows reserved for inline charts
}

impl StoreConfig {
    /// Load settings from `path` (any format the `config` crate knows by
    /// extension), then overlay `BUCKETKIT_*` environment variables.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Settings from `BUCKETKIT_*` environment variables alone.
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn get_export_path(&self) -> &str {
        self.export_path.as_deref().unwrap_or(ExportOptions::DEFAULT_PATH)
    }

    pub fn get_plot_height(&self) -> u16 {
        self.plot_height.unwrap_or(20)
    }

    /// Export options seeded with the configured destination key.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::default().path(self.get_export_path())
    }

    pub fn connector(&self) -> S3Connector {
        S3Connector::new(self)
    }

    /// Install the global logger at the configured level, mirrored into
    /// `log_path` when one is set.
    pub fn init_logger(&self) -> Result<()> {
        initialize_logger(self.log_path.as_deref(), self.get_log_level())
    }
}
