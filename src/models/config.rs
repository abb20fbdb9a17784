//! Configuration model loaded from external sources.

use std::env;
use std::path::PathBuf;

use config::Config;
use serde::Deserialize;
use thiserror::Error;

use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, ItemsPerPage};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error loading settings: {0}")]
    Load(#[from] config::ConfigError),
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Settings of the dashboard preview tooling.
pub struct DashboardConfig {
    /// Directory holding the JSON listing snapshots.
    pub snapshot_dir: PathBuf,
    /// Initial page size of every listing; clamped into the accepted range.
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: usize,
}

impl DashboardConfig {
    /// Loads `<dir>/default.yaml`, the optional `<dir>/<APP_ENV>.yaml`
    /// profile (defaults to `local`) and `APP_`-prefixed environment variables.
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        let settings = Config::builder()
            .add_source(config::File::with_name(&format!("{config_dir}/default")))
            .add_source(
                config::File::with_name(&format!("{config_dir}/{app_env}")).required(false),
            )
            .add_source(config::Environment::with_prefix("APP"))
            .build()?;

        Ok(settings.try_deserialize::<DashboardConfig>()?)
    }

    pub fn items_per_page(&self) -> ItemsPerPage {
        ItemsPerPage::from(self.default_items_per_page)
    }
}
