//! Place-name geocoding against a Nominatim-compatible service.
//!
//! DESIGN
//! ======
//! `Geocoder` is the seam handlers depend on; `NominatimClient` is the
//! production implementation. Response parsing lives in pure functions so
//! the shape handling is testable without a network.

use serde::{Deserialize, Serialize};

use super::lookup::{LookupError, get_text};

/// Name returned when reverse geocoding finds no settlement.
pub const UNNAMED_PLACE: &str = "Unnamed place";

/// A resolved place: display name and coordinates in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Forward and reverse geocoding.
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Settlement name for a coordinate, `None` when the point has none.
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, LookupError>;

    /// Best match for a free-text place query, `None` when nothing matches.
    async fn search(&self, query: &str) -> Result<Option<Place>, LookupError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }
}

#[async_trait::async_trait]
impl Geocoder for NominatimClient {
    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, LookupError> {
        let url = format!("{}/reverse", self.base_url);
        let lat = latitude.to_string();
        let lon = longitude.to_string();
        let text = get_text(&self.http, &url, &[("format", "json"), ("lat", &lat), ("lon", &lon)]).await?;
        parse_reverse(&text)
    }

    async fn search(&self, query: &str) -> Result<Option<Place>, LookupError> {
        let url = format!("{}/search", self.base_url);
        let text = get_text(&self.http, &url, &[("format", "json"), ("q", query), ("limit", "1")]).await?;
        parse_search(query, &text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    hamlet: Option<String>,
}

#[derive(Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// First of city, town, village, hamlet present on the reverse result.
pub(crate) fn parse_reverse(json: &str) -> Result<Option<String>, LookupError> {
    let response: ReverseResponse = serde_json::from_str(json).map_err(|e| LookupError::Parse(e.to_string()))?;
    let Some(address) = response.address else {
        return Ok(None);
    };
    Ok([address.city, address.town, address.village, address.hamlet]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty()))
}

/// First search hit as a [`Place`]. The hit's `display_name` wins over the query.
pub(crate) fn parse_search(query: &str, json: &str) -> Result<Option<Place>, LookupError> {
    let hits: Vec<SearchHit> = serde_json::from_str(json).map_err(|e| LookupError::Parse(e.to_string()))?;
    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let latitude = parse_coordinate("lat", &hit.lat, 90.0)?;
    let longitude = parse_coordinate("lon", &hit.lon, 180.0)?;
    let name = hit
        .display_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| query.trim().to_string());

    Ok(Some(Place { name, latitude, longitude }))
}

fn parse_coordinate(field: &str, raw: &str, limit: f64) -> Result<f64, LookupError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| LookupError::Parse(format!("{field} is not a number: {raw}")))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(LookupError::Parse(format!("{field} out of range: {raw}")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "geocode_test.rs"]
mod tests;
