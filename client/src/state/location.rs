//! Observer location: form fields, city search, device geolocation.
//!
//! DESIGN
//! ======
//! Network and browser calls happen in the map components; this module only
//! applies their outcomes. Every failure leaves the previous observer in
//! place and reports a banner message instead.

use sky::observer::{DEFAULT_ALTITUDE_M, Observer};

use crate::net::types::Place;

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

pub const CITY_NOT_FOUND: &str = "City not found";
pub const CITY_FETCH_FAILED: &str = "Failed to fetch city";
pub const GEOLOCATION_UNSUPPORTED: &str = "Geolocation not supported on this device";
pub const LOCATION_DENIED: &str = "Location access denied";
/// Name used when reverse geocoding fails outright.
pub const MY_LOCATION: &str = "My Location";

/// Result of a forward geocoding request.
#[derive(Clone, Debug, PartialEq)]
pub enum CitySearch {
    Found(Place),
    NotFound,
    Failed,
}

/// Result of asking the device for its position.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoOutcome {
    Unsupported,
    Denied,
    /// Position obtained; `name` is `None` when reverse geocoding failed.
    Located { latitude: f64, longitude: f64, name: Option<String> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocationState {
    pub observer: Observer,
    pub query: String,
    pub drawer_open: bool,
    pub searching: bool,
}

impl Default for LocationState {
    fn default() -> Self {
        Self { observer: Observer::default(), query: String::new(), drawer_open: true, searching: false }
    }
}

impl LocationState {
    pub fn set_label(&mut self, label: &str) {
        label.clone_into(&mut self.observer.name);
    }

    /// Trimmed query, or `None` when the search should not run.
    pub fn search_query(&self) -> Option<String> {
        let q = self.query.trim();
        (!q.is_empty()).then(|| q.to_owned())
    }

    /// Apply a city search outcome.
    ///
    /// # Errors
    ///
    /// Returns the banner message when no location was applied.
    pub fn apply_city_search(&mut self, outcome: CitySearch) -> Result<(), &'static str> {
        self.searching = false;
        match outcome {
            CitySearch::Found(place) => {
                self.observer = Observer::at(place.name, place.latitude, place.longitude);
                self.query.clear();
                Ok(())
            }
            CitySearch::NotFound => Err(CITY_NOT_FOUND),
            CitySearch::Failed => Err(CITY_FETCH_FAILED),
        }
    }

    /// Apply a geolocation outcome.
    ///
    /// # Errors
    ///
    /// Returns the banner message when no location was applied.
    pub fn apply_geolocation(&mut self, outcome: GeoOutcome) -> Result<(), &'static str> {
        match outcome {
            GeoOutcome::Unsupported => Err(GEOLOCATION_UNSUPPORTED),
            GeoOutcome::Denied => Err(LOCATION_DENIED),
            GeoOutcome::Located { latitude, longitude, name } => {
                let name = name.unwrap_or_else(|| MY_LOCATION.to_owned());
                self.observer = Observer { name, latitude, longitude, altitude: DEFAULT_ALTITUDE_M };
                Ok(())
            }
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Drawer toggle text, e.g. `Hide • New York`.
    pub fn toggle_label(&self) -> String {
        let verb = if self.drawer_open { "Hide" } else { "Location" };
        format!("{verb} • {}", self.observer.name)
    }
}

/// Typed latitude in degrees, `None` when unparsable or outside ±90.
pub fn parse_latitude(raw: &str) -> Option<f64> {
    parse_degrees(raw, 90.0)
}

/// Typed longitude in degrees, `None` when unparsable or outside ±180.
pub fn parse_longitude(raw: &str) -> Option<f64> {
    parse_degrees(raw, 180.0)
}

fn parse_degrees(raw: &str, limit: f64) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= limit)
}
