//! Application configuration.
//!
//! Loaded from the file named by `MARSROLL_CONFIG`, falling back to
//! `./marsroll.toml`, falling back to built-in defaults when no file
//! exists. Every key is optional; absent keys keep their default.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Endpoints and local storage paths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the Mars photo catalog
    pub mars_base_url: String,
    /// Base URL of the Picsum service
    pub picsum_base_url: String,
    /// Base URL of the mirror document store
    pub mirror_base_url: String,
    /// Path of the local SQLite database file
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mars_base_url: "https://android-kotlin-fun-mars-server.appspot.com".to_string(),
            picsum_base_url: "https://picsum.photos".to_string(),
            mirror_base_url: "http://localhost:8765".to_string(),
            database_path: "./data/marsroll.db".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses a configuration from a TOML string
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Loads the configuration for this process
    pub fn load() -> Result<Self, AppError> {
        let path =
            std::env::var("MARSROLL_CONFIG").unwrap_or_else(|_| "./marsroll.toml".to_string());

        match std::fs::read_to_string(&path) {
            Ok(raw) => {
                let config = Self::from_toml(&raw)
                    .map_err(|e| AppError::Config(format!("{}: {}", path, e)))?;
                log::info!("Configuration loaded from {}", path);
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No configuration file at {}, using defaults", path);
                Ok(Self::default())
            }
            Err(e) => Err(AppError::Filesystem(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = AppConfig::default();
        assert_eq!(
            config.mars_base_url,
            "https://android-kotlin-fun-mars-server.appspot.com"
        );
        assert_eq!(config.picsum_base_url, "https://picsum.photos");
    }

    #[test]
    fn test_from_toml() {
        let config = AppConfig::from_toml(
            r#"
            mars_base_url = "http://localhost:9001"
            picsum_base_url = "http://localhost:9002"
            mirror_base_url = "http://localhost:9003"
            database_path = "/tmp/test.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.mars_base_url, "http://localhost:9001");
        assert_eq!(config.database_path, "/tmp/test.db");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("mirror_base_url = \"http://store:8080\"").unwrap();

        assert_eq!(config.mirror_base_url, "http://store:8080");
        assert_eq!(config.picsum_base_url, "https://picsum.photos");
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(AppConfig::from_toml("mars_base_url = 17").is_err());
    }
}
