//! Wire types shared with the server's lookup endpoints.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// `GET /api/geocode/search` body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// `GET /api/geocode/reverse` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName {
    pub name: String,
}

/// `GET /api/encyclopedia/summary` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub extract: Option<String>,
}
