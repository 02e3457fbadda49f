//! Middleware for the cafe API
//!
//! Provides request logging with duration tracking.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

/// Request logging middleware
///
/// Logs every request with method, URI, status code and duration.
/// Successful requests are logged at INFO, rejected queries (4xx) at
/// WARN and server failures at ERROR.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();

    if status.is_success() {
        info!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else if status.is_client_error() {
        warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        );
    } else {
        error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    response
}
