//! Geocoding proxy handlers.
//!
//! The browser never talks to the geocoding service directly; these
//! handlers validate input, call the configured [`Geocoder`], and reduce
//! failures to status codes.
//!
//! [`Geocoder`]: crate::services::geocode::Geocoder

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::lookup_error_to_status;
use crate::services::geocode::{Place, UNNAMED_PLACE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaceName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/geocode/reverse?lat=&lon=`
///
/// Points without a settlement resolve to "Unnamed place".
pub async fn reverse(
    State(state): State<AppState>,
    Query(query): Query<ReverseQuery>,
) -> Result<Json<PlaceName>, StatusCode> {
    if !valid_coordinate(query.lat, 90.0) || !valid_coordinate(query.lon, 180.0) {
        return Err(StatusCode::BAD_REQUEST);
    }

    let name = state
        .geocoder
        .reverse(query.lat, query.lon)
        .await
        .map_err(|e| lookup_error_to_status(&e))?;

    Ok(Json(PlaceName { name: name.unwrap_or_else(|| UNNAMED_PLACE.to_string()) }))
}

/// `GET /api/geocode/search?q=`
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Place>, StatusCode> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    match state.geocoder.search(q).await {
        Ok(Some(place)) => Ok(Json(place)),
        Ok(None) => {
            tracing::debug!(query = q, "no geocoding match");
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => Err(lookup_error_to_status(&e)),
    }
}

fn valid_coordinate(value: f64, limit: f64) -> bool {
    value.is_finite() && value.abs() <= limit
}

#[cfg(test)]
#[path = "geocode_test.rs"]
mod tests;
