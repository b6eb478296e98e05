//! Application configuration structures

use crate::error::{Result, SaturnError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Published location of the Saturn monthly data snapshot.
const DEFAULT_BASE_URL: &str =
    "https://ipfs.io/ipfs/bafybeibk6ob5meok5567wjcnodlzbmqjutguxqzulscqobejtevl7velnq/year=2023/month=8";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data source configuration
    pub data: DataConfig,

    /// Chart output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Base URL the four dataset files are fetched from
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Chart output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the rendered charts are written to
    pub dir: String,

    /// Chart surface width in pixels
    pub width: u32,

    /// Chart surface height in pixels
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "charts".to_string(),
            width: 1000,
            height: 600,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SaturnError::config_with_source(
                format!("could not read config file {}", path.display()),
                e,
            )
        })?;
        toml::from_str(&text).map_err(|e| {
            SaturnError::config_with_source(
                format!("could not parse config file {}", path.display()),
                e,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.data.base_url.starts_with("https://ipfs.io/ipfs/"));
        assert_eq!(config.data.timeout_secs, 30);
        assert_eq!(config.output.dir, "charts");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[data]\nbase_url = \"http://localhost:9000/data\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.data.base_url, "http://localhost:9000/data");
        assert_eq!(config.data.timeout_secs, 30);
        assert_eq!(config.output.width, 1000);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/saturn.toml").unwrap_err();
        assert!(matches!(err, SaturnError::Config { .. }));
    }
}
