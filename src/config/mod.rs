//! # Server Configuration
//!
//! Layered configuration for the client configuration server. Values come from
//! built-in defaults, an optional TOML file, and `CONFIG_SERVER__*` environment
//! overrides, in that order of precedence.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use client_config_server::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load_from_env()?;
//! println!("Binding to {}", config.web.bind_address);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::constants::env_vars;

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub web: WebConfig,
    pub client_env: ClientEnvConfig,
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.web.validate()?;
        self.client_env.validate()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WebConfig {
    /// Address to bind the web server to
    pub bind_address: String,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,

    /// CORS configuration
    pub cors: WebCorsConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
            request_timeout_ms: 30_000,
            cors: WebCorsConfig::default(),
        }
    }
}

impl WebConfig {
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            ConfigurationError::invalid_value(
                "web.bind_address",
                &self.bind_address,
                format!("not a socket address ({e})"),
            )
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.socket_addr()?;
        if self.request_timeout_ms == 0 {
            return Err(ConfigurationError::invalid_value(
                "web.request_timeout_ms",
                "0",
                "timeout must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Web API CORS configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WebCorsConfig {
    /// Whether CORS is enabled
    pub enabled: bool,

    /// Allowed origins; `*` allows any origin
    pub allowed_origins: Vec<String>,

    /// Max age in seconds
    pub max_age_seconds: u64,
}

impl Default for WebCorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            max_age_seconds: 86400,
        }
    }
}

impl WebCorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Which environment variables back the client configuration, and how much
/// diagnostic output reading them produces
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientEnvConfig {
    /// Variable holding the backend service URL
    pub url_var: String,

    /// Variable holding the backend service API key
    pub key_var: String,

    /// Variables starting with this prefix get a redacted debug preview
    pub diagnostic_prefix: String,

    /// Emit the per-variable debug previews at all
    pub log_prefixed_vars: bool,

    /// Warn when a credential matches a value the browser client rejects
    pub detect_placeholders: bool,
}

impl Default for ClientEnvConfig {
    fn default() -> Self {
        Self {
            url_var: env_vars::SUPABASE_URL.to_string(),
            key_var: env_vars::SUPABASE_KEY.to_string(),
            diagnostic_prefix: env_vars::SUPABASE_PREFIX.to_string(),
            log_prefixed_vars: true,
            detect_placeholders: true,
        }
    }
}

impl ClientEnvConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("client_env.url_var", &self.url_var),
            ("client_env.key_var", &self.key_var),
            ("client_env.diagnostic_prefix", &self.diagnostic_prefix),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigurationError::invalid_value(
                    field,
                    value.as_str(),
                    "must not be empty",
                ));
            }
        }
        Ok(())
    }
}
