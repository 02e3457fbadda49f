//! Core domain logic (protocol-agnostic)
//!
//! This module contains all logic that is independent of the HTTP
//! transport.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **directory**: Read-only city to cafe mapping
//! - **query**: Parameter validation, search filter, count limit
//! - **xdg**: XDG config directory handling
//! - **services**: Shared service container

pub mod config;
pub mod directory;
pub mod error;
pub mod query;
pub mod services;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use directory::CafeDirectory;
pub use error::{CafeError, Result};
pub use query::{CafeParams, CafeQuery};
pub use services::Services;
