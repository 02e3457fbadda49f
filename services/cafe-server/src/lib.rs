//! Cafe service - city cafe directory over HTTP
//!
//! Serves a read-only directory of cafe names per city with optional
//! case-insensitive search and result-count limiting.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, xdg
//!   - directory (city to cafe mapping)
//!   - query (validation, filtering, truncation)
//!   - services (shared container)
//!
//! - **http**: REST adapter (depends on core)
//!   - handlers, middleware, router

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::directory::CafeDirectory;
pub use core::error::{CafeError, Result};
pub use core::query::{CafeParams, CafeQuery};
pub use core::services::Services;
