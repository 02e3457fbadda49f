//! XDG Base Directory Support
//!
//! Resolves where the cafe service looks for its config file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// XDG directory structure for the cafe service
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit CAFE_CONFIG_DIR env var
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("CAFE_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("cafe");
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("cafe")
    }

    /// Path of the config file inside the config directory
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
