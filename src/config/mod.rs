//! Configuration management for ordertrack
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use ordertrack::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Server listening on: {}", config.server.bind_addr);
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `ORDERTRACK__<section>__<key>`
//!
//! Examples:
//! - `ORDERTRACK__SERVER__BIND_ADDR=0.0.0.0:9000`
//! - `ORDERTRACK__SERVER__FJALL_PATH=/var/lib/ordertrack`
//! - `ORDERTRACK__NOTICES__TTL_SECS=120`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/ordertrack.toml`.
//! This can be overridden using the `ORDERTRACK_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, NoticeConfig, ServerConfig, TelemetryConfig};
pub use validation::ValidationError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`ORDERTRACK__*`)
    /// 2. TOML file (default: `config/ordertrack.toml`)
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Path of the TOML file [`Config::load`] reads
    pub fn source_path() -> std::path::PathBuf {
        sources::config_path()
    }

    /// Log the configuration file in use, or its absence
    ///
    /// Call once the tracing subscriber is installed.
    pub fn log_source() -> bool {
        sources::log_source(&Self::source_path())
    }

    /// Load configuration from a specific path
    ///
    /// Useful for testing with custom configuration files.
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
