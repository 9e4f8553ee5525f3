//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the case search service,
//! supporting TOML files and environment variable overrides with validation
//! and type-safe access to all system settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Range checks and consistency checks, errors name the field
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Command line arguments (highest priority, applied in `main`)
//! 2. Environment variables (`LEXI_*`)
//! 3. Configuration files
//! 4. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use lexi_case_search::config::Config;
//!
//! let config = Config::from_file("config.toml").unwrap();
//! println!("Server port: {}", config.server.port);
//! ```

use crate::errors::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server and API configuration
    pub server: ServerConfig,
    /// Search behavior and result policies
    pub search: SearchEngineConfig,
    /// Data source settings
    pub data: DataConfig,
    /// Logging and monitoring
    pub logging: LoggingConfig,
    /// Performance tuning
    pub performance: PerformanceConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable CORS for browser front ends
    pub enable_cors: bool,
}

/// Search engine behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEngineConfig {
    /// Minimum query length after trimming
    pub min_query_length: usize,
    /// Maximum query length
    pub max_query_length: usize,
    /// Number of store-prefix records substituted when a search matches
    /// nothing ("always show something" policy)
    pub fallback_limit: usize,
    /// Number of store-prefix records returned for the judge category
    /// placeholder
    pub judge_placeholder_limit: usize,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Optional JSON file with case records; the built-in seed set is used
    /// when absent
    pub cases_path: Option<PathBuf>,
}

/// Logging and monitoring configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

/// Performance tuning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Number of HTTP worker threads
    pub worker_threads: usize,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| SearchError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| SearchError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("LEXI_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LEXI_PORT") {
            self.server.port = port.parse().map_err(|_| SearchError::Config {
                message: "Invalid port number in LEXI_PORT".to_string(),
            })?;
        }
        if let Ok(data_path) = std::env::var("LEXI_CASES_PATH") {
            self.data.cases_path = Some(PathBuf::from(data_path));
        }
        if let Ok(level) = std::env::var("LEXI_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(SearchError::ValidationFailed {
                field: "server.port".to_string(),
                reason: "Port cannot be zero".to_string(),
            });
        }

        if self.search.min_query_length == 0 {
            return Err(SearchError::ValidationFailed {
                field: "search.min_query_length".to_string(),
                reason: "Minimum query length must be at least one".to_string(),
            });
        }

        if self.search.min_query_length > self.search.max_query_length {
            return Err(SearchError::ValidationFailed {
                field: "search.min_query_length".to_string(),
                reason: "Minimum query length cannot be greater than maximum".to_string(),
            });
        }

        if self.performance.worker_threads == 0 {
            return Err(SearchError::ValidationFailed {
                field: "performance.worker_threads".to_string(),
                reason: "Worker thread count must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SearchError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                enable_cors: true,
            },
            search: SearchEngineConfig {
                min_query_length: 1,
                max_query_length: 256,
                fallback_limit: 2,
                judge_placeholder_limit: 3,
            },
            data: DataConfig { cases_path: None },
            logging: LoggingConfig {
                level: "info".to_string(),
                json_format: false,
            },
            performance: PerformanceConfig {
                worker_threads: num_cpus::get(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search.fallback_limit, 2);
        assert_eq!(config.search.judge_placeholder_limit, 3);
    }

    #[test]
    fn test_validation_names_offending_field() {
        let mut config = Config::default();
        config.search.min_query_length = 100;
        config.search.max_query_length = 10;

        match config.validate() {
            Err(SearchError::ValidationFailed { field, .. }) => {
                assert_eq!(field, "search.min_query_length");
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_config_file_round_trip() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        config.save_to_file(&path).unwrap();
        let loaded = Config::from_file(&path).unwrap();

        assert_eq!(loaded.server.port, config.server.port);
        assert_eq!(loaded.search.max_query_length, config.search.max_query_length);
    }

    #[test]
    fn test_partial_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\n").unwrap();

        // Missing sections are a configuration error, not a silent default
        assert!(Config::from_file(&path).is_err());
    }
}
