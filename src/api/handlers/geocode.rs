//! Handler for the geocoding endpoint.

use axum::{
    Json,
    extract::{RawQuery, State},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::geocode::{GeocodeQuery, GeocodeResponse};
use crate::domain::request_context::RequestContext;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves an address to coordinates.
///
/// # Endpoint
///
/// `GET /geocode?address=1+Infinite+Loop`
///
/// # Request Flow
///
/// 1. Take the first `address` parameter; reject it if missing, blank or overlong
/// 2. Build a [`RequestContext`] with the configured request deadline
/// 3. Delegate to [`crate::application::services::GeocodeService::geocode`]
///
/// Dropping the request (client disconnect) drops the in-flight upstream call.
///
/// # Response
///
/// ```json
/// {
///   "address": "1 Infinite Loop, Cupertino, CA 95014, USA",
///   "latitude": 37.33,
///   "longitude": -122.03,
///   "source": "upstream"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: missing, blank or overlong address
/// - **404 Not Found**: provider matched nothing
/// - **502 Bad Gateway**: provider failure
/// - **504 Gateway Timeout**: request deadline exceeded
pub async fn geocode_handler(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<GeocodeResponse>, AppError> {
    let query = GeocodeQuery::from_query_string(raw_query.as_deref());
    query.validate()?;

    let address = query.address.as_deref().map(str::trim).unwrap_or_default();
    if address.is_empty() {
        return Err(AppError::bad_request(
            "address query parameter is required",
            json!({}),
        ));
    }

    let ctx = RequestContext::with_timeout(state.request_timeout);
    let result = state.geocode_service.geocode(&ctx, address).await?;

    Ok(Json(result.into()))
}
