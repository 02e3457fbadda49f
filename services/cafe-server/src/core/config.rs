//! Configuration management for the cafe service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! The config file may also carry a `[cities]` table replacing the
//! built-in cafe directory.

use crate::core::directory::CafeDirectory;
use crate::core::error::{CafeError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub response: ResponseConfig,

    /// City table overriding the seed directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<BTreeMap<String, Vec<String>>>,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Response formatting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResponseConfig {
    /// Separator placed between cafe names in the response body
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_delimiter() -> String {
    ",".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg, config_path)
    }

    /// Load config with explicit XDG directories
    ///
    /// File priority order:
    /// 1. `config_path` argument
    /// 2. CAFE_CONFIG env var
    /// 3. XDG config file (~/.config/cafe/config.toml)
    /// 4. ./cafe.toml
    /// 5. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs, config_path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = config_path {
            Self::from_file(path)?
        } else if let Ok(path) = env::var("CAFE_CONFIG") {
            Self::from_file(path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("cafe.toml").exists() {
                Self::from_file("cafe.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("CAFE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("CAFE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(delimiter) = env::var("CAFE_DELIMITER") {
            self.response.delimiter = delimiter;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(CafeError::ConfigError("Host must not be empty".to_string()));
        }

        if self.server.port == 0 {
            return Err(CafeError::ConfigError("Port must be non-zero".to_string()));
        }

        if self.response.delimiter.is_empty() {
            return Err(CafeError::ConfigError(
                "Delimiter must not be empty".to_string(),
            ));
        }

        if let Some(cities) = &self.cities {
            if cities.keys().any(|city| city.is_empty()) {
                return Err(CafeError::ConfigError(
                    "City names must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Build the cafe directory described by this config
    pub fn directory(&self) -> CafeDirectory {
        match &self.cities {
            Some(cities) => CafeDirectory::new(cities.clone()),
            None => CafeDirectory::seeded(),
        }
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}", self.bind_addr());
        tracing::info!("  Delimiter: {:?}", self.response.delimiter);
        match &self.cities {
            Some(cities) => tracing::info!("  Directory: {} cities from config", cities.len()),
            None => tracing::info!("  Directory: built-in seed data"),
        }
    }
}
