use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::ResolverMode;

/// Prefix of every environment variable the service reads, e.g. `CELEBRATIONS_PORT`
pub const ENV_PREFIX: &str = "CELEBRATIONS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_resolver_mode")]
    pub resolver_mode: String,
    /// JSON catalog document replacing the embedded catalog
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub assets_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_service_version")]
    pub service_version: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub enable_json_logging: bool,
}

impl Config {
    pub fn from_environment() -> Result<Self, ConfigError> {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Load every section from variables named `{prefix}_{FIELD}`
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        info!("Loading configuration from environment");

        let config = Config {
            server: ServerConfig::from_env_with_prefix(prefix)?,
            catalog: CatalogConfig::from_env_with_prefix(prefix)?,
            observability: ObservabilityConfig::from_env_with_prefix(prefix)?,
        };

        config.validate()?;

        info!("Configuration loaded successfully");
        debug!("Configuration: {:?}", config);

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Request timeout cannot be 0".to_string(),
            });
        }

        self.catalog.resolver_mode()?;

        if let Some(path) = &self.catalog.data_path {
            if !Path::new(path).is_file() {
                return Err(ConfigError::ValidationError {
                    message: format!("Catalog data file not found: {}", path),
                });
            }
        }

        if self.observability.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Service name cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl ServerConfig {
    fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        load_section(prefix, "server")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        load_section(prefix, "catalog")
    }

    pub fn resolver_mode(&self) -> Result<ResolverMode, ConfigError> {
        self.resolver_mode
            .parse()
            .map_err(|message| ConfigError::ValidationError { message })
    }
}

impl ObservabilityConfig {
    fn from_env_with_prefix(prefix: &str) -> Result<Self, ConfigError> {
        load_section(prefix, "observability")
    }

    /// Empty endpoint values count as unset
    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.otlp_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
    }
}

fn load_section<T: serde::de::DeserializeOwned>(
    prefix: &str,
    section: &str,
) -> Result<T, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix(prefix))
        .build()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to load {} config: {}", section, e),
        })?;

    settings
        .try_deserialize()
        .map_err(|e| ConfigError::LoadError {
            message: format!("Failed to deserialize {} config: {}", section, e),
        })
}

// Default value functions
pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_resolver_mode() -> String {
    ResolverMode::default().to_string()
}

pub(crate) fn default_service_name() -> String {
    "celebrations-rs".to_string()
}

pub(crate) fn default_service_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}
