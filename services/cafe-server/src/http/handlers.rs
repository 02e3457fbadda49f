//! HTTP request handlers for the cafe API
//!
//! Implements the single `GET /cafe` endpoint.

use axum::extract::{Query, State};

use crate::core::error::CafeError;
use crate::core::query::{CafeParams, CafeQuery};
use crate::core::services::Services;

/// Cafe list handler
///
/// Validates the query string against the directory, filters by the
/// optional search term, truncates to the optional count and joins
/// the remaining names with the configured delimiter.
///
/// # Arguments
///
/// * `services` - Shared services
/// * `pairs` - Decoded query-string pairs; the first value of a
///   repeated key is used
///
/// # Returns
///
/// Plain-text list of cafe names (possibly empty)
///
/// # Errors
///
/// - `UnknownCity`: city missing or not in the directory
/// - `InvalidCount`: count is not a non-negative integer
pub async fn cafe_handler(
    State(services): State<Services>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, CafeError> {
    let params = CafeParams::from_pairs(pairs);
    let query = CafeQuery::parse(&params, &services.directory).map_err(|e| {
        if e.is_bad_request() {
            tracing::debug!(city = ?params.city, count = ?params.count, "Rejected query: {e}");
        } else {
            tracing::warn!("Query failed: {e}");
        }
        e
    })?;

    let cafes = query.apply(&services.directory);
    tracing::debug!(
        city = %query.city,
        matched = cafes.len(),
        "Cafe query served"
    );

    Ok(cafes.join(&services.config.response.delimiter))
}
