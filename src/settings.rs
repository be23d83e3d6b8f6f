//! Configuration loaded from `config/*.yaml` and `APP_*` environment variables.

use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::listing::ListingColumns;

/// Settings for the query service binary.
#[derive(Clone, Debug, Deserialize)]
pub struct ServiceConfig {
    pub address: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    pub dataset_path: String,
    #[serde(default)]
    pub columns: ListingColumns,
}

/// Settings for the frontend binary.
#[derive(Clone, Debug, Deserialize)]
pub struct FrontendConfig {
    pub address: String,
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
    pub backend_url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub service: ServiceConfig,
    pub frontend: FrontendConfig,
}

fn default_workers() -> usize {
    4
}

impl Settings {
    /// Layering: `config/default`, then `config/{APP_ENV}` (defaults to `local`,
    /// optional), then `APP_` environment variables such as `APP_SERVICE__PORT`.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
