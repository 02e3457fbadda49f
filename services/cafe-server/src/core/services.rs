//! Shared service container
//!
//! Holds everything the HTTP handlers need, built once at startup.

use crate::core::config::Config;
use crate::core::directory::CafeDirectory;
use std::sync::Arc;

/// Shared services container
///
/// Cloned into every request; all fields are read-only.
#[derive(Clone)]
pub struct Services {
    /// Cafe directory queried by the handlers
    pub directory: Arc<CafeDirectory>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let directory = Arc::new(config.directory());

        Self {
            directory,
            config: Arc::new(config),
        }
    }
}
