//! Observer location fed to the engine.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

/// Altitude in metres used whenever a location comes from a lookup rather
/// than the form.
pub const DEFAULT_ALTITUDE_M: f64 = 10.0;

/// Simulated viewing position. Latitude and longitude are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Default for Observer {
    fn default() -> Self {
        Self { name: "New York".to_owned(), latitude: 40.7128, longitude: -74.006, altitude: DEFAULT_ALTITUDE_M }
    }
}

impl Observer {
    /// An observer at the given coordinates with the default altitude.
    #[must_use]
    pub fn at(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self { name: name.into(), latitude, longitude, altitude: DEFAULT_ALTITUDE_M }
    }

    /// Latitude in radians, the unit the engine's observer expects.
    #[must_use]
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    /// Longitude in radians.
    #[must_use]
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }
}
