//! Hierarchical configuration loading for the HTTP transport.

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::HttpConfig;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("user_agent cannot be empty")]
    EmptyUserAgent,

    #[error("invalid pool_max_idle_per_host: {0}. Must be at least 1")]
    InvalidPoolSize(usize),

    #[error("configuration extraction failed: {0}")]
    Extraction(#[from] Box<figment::Error>),
}

/// Loads [`HttpConfig`] with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. Environment variables (`CACHETTE_` prefix)
    pub fn load() -> Result<HttpConfig, ConfigError> {
        let config: HttpConfig = Figment::new()
            .merge(Serialized::defaults(HttpConfig::default()))
            .merge(Env::prefixed("CACHETTE_"))
            .extract()
            .map_err(Box::new)?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a YAML file, merged between the defaults and
    /// the environment.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<HttpConfig, ConfigError> {
        let config: HttpConfig = Figment::new()
            .merge(Serialized::defaults(HttpConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("CACHETTE_"))
            .extract()
            .map_err(Box::new)?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &HttpConfig) -> Result<(), ConfigError> {
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }
        if config.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        if config.pool_max_idle_per_host == 0 {
            return Err(ConfigError::InvalidPoolSize(config.pool_max_idle_per_host));
        }
        Ok(())
    }
}
