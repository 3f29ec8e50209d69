//! Layered configuration loader
//!
//! 0. Loads a `.env` file if present (via dotenvy)
//! 1. Merges an optional TOML file from `CONFIG_SERVER_CONFIG_PATH`
//! 2. Applies `CONFIG_SERVER__SECTION__FIELD` environment overrides
//! 3. Fills anything left unset from `ServerConfig::default()`
//! 4. Validates the result

use config::{Config, Environment, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::ConfigResult;
use super::ServerConfig;
use crate::constants::service_env;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Detect environment from `CONFIG_SERVER_ENV`, then `APP_ENV`, or default to "development"
    pub fn detect_environment() -> String {
        std::env::var(service_env::ENVIRONMENT)
            .or_else(|_| std::env::var(service_env::APP_ENVIRONMENT))
            .unwrap_or_else(|_| service_env::DEFAULT_ENVIRONMENT.to_string())
    }

    /// Path of the TOML file to merge, from `CONFIG_SERVER_CONFIG_PATH` or the default location
    pub fn config_path() -> PathBuf {
        std::env::var(service_env::CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(service_env::DEFAULT_CONFIG_PATH))
    }

    /// Load configuration using the process environment
    ///
    /// Automatically loads a `.env` file if present before reading anything else.
    pub fn load_from_env() -> ConfigResult<ServerConfig> {
        dotenvy::dotenv().ok();

        let path = Self::config_path();
        info!(
            config_path = %path.display(),
            environment = %Self::detect_environment(),
            "Loading server configuration"
        );

        Self::load_from_path(&path)
    }

    /// Load configuration from a specific file, still honoring environment overrides.
    /// A missing file leaves the defaults in place.
    pub fn load_from_path(path: &Path) -> ConfigResult<ServerConfig> {
        Self::load(path, Self::overrides())
    }

    /// Load configuration from a file plus an explicit override source
    pub fn load(path: &Path, overrides: Environment) -> ConfigResult<ServerConfig> {
        let config: ServerConfig = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(overrides)
            .build()?
            .try_deserialize()?;

        config.validate()?;

        debug!(?config, "Server configuration loaded and validated");
        Ok(config)
    }

    /// `CONFIG_SERVER__*` override source
    pub fn overrides() -> Environment {
        Environment::with_prefix(service_env::OVERRIDE_PREFIX)
            .separator(service_env::OVERRIDE_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("web.cors.allowed_origins")
    }
}
