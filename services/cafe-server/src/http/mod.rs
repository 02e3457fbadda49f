//! HTTP REST adapter
//!
//! Depends only on core/. Exposes the cafe directory over a single
//! `GET /cafe` endpoint via the Axum web framework.

pub mod handlers;
pub mod middleware;

pub use handlers::*;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the application router with middleware and shared state
pub fn router(services: Services) -> Router {
    Router::new()
        .route("/cafe", get(handlers::cafe_handler))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
