//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the lookup services behind trait objects so tests can swap in
//! scripted fakes without a network.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::encyclopedia::{Encyclopedia, WikipediaClient};
use crate::services::geocode::{Geocoder, NominatimClient};
use crate::services::lookup::{self, LookupError};

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub geocoder: Arc<dyn Geocoder>,
    pub encyclopedia: Arc<dyn Encyclopedia>,
}

impl AppState {
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>, encyclopedia: Arc<dyn Encyclopedia>) -> Self {
        Self { geocoder, encyclopedia }
    }

    /// Build production lookup clients sharing one HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &ServerConfig) -> Result<Self, LookupError> {
        let http = lookup::http_client(&config.user_agent, config.timeouts)?;
        let geocoder = NominatimClient::new(http.clone(), config.nominatim_base_url.clone());
        let encyclopedia = WikipediaClient::new(http, config.wikipedia_api_url.clone());
        Ok(Self::new(Arc::new(geocoder), Arc::new(encyclopedia)))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
