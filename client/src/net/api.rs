//! REST helpers for the server's lookup proxies.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since lookups only run in response to
//! browser interaction.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Each helper
//! already folds HTTP outcomes into the shape the caller applies, so the
//! map components never inspect status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::location::CitySearch;
#[cfg(feature = "hydrate")]
use super::types::{Place, PlaceName, Summary};

#[cfg(any(test, feature = "hydrate"))]
const REVERSE_ENDPOINT: &str = "/api/geocode/reverse";
#[cfg(any(test, feature = "hydrate"))]
const SEARCH_ENDPOINT: &str = "/api/geocode/search";
#[cfg(any(test, feature = "hydrate"))]
const SUMMARY_ENDPOINT: &str = "/api/encyclopedia/summary";

#[cfg(any(test, feature = "hydrate"))]
fn reverse_params(latitude: f64, longitude: f64) -> [(&'static str, String); 2] {
    [("lat", latitude.to_string()), ("lon", longitude.to_string())]
}

#[cfg(any(test, feature = "hydrate"))]
fn search_params(query: &str) -> [(&'static str, String); 1] {
    [("q", query.trim().to_owned())]
}

#[cfg(any(test, feature = "hydrate"))]
fn summary_params(name: &str) -> [(&'static str, String); 1] {
    [("name", name.to_owned())]
}

/// Map a search response status to its outcome when the body is unusable.
#[cfg(any(test, feature = "hydrate"))]
fn search_status_outcome(status: u16) -> CitySearch {
    if status == 404 { CitySearch::NotFound } else { CitySearch::Failed }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(endpoint: &str, status: u16) -> String {
    format!("{endpoint} failed: {status}")
}

/// Settlement name for a coordinate via `/api/geocode/reverse`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-2xx status.
pub async fn reverse_geocode(latitude: f64, longitude: f64) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(REVERSE_ENDPOINT)
            .query(reverse_params(latitude, longitude))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_failed_message(REVERSE_ENDPOINT, resp.status()));
        }
        let body: PlaceName = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (latitude, longitude);
        Err("not available on server".to_owned())
    }
}

/// Forward-geocode a city via `/api/geocode/search`.
pub async fn search_city(query: &str) -> CitySearch {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(SEARCH_ENDPOINT)
            .query(search_params(query))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("city search failed: {e}");
                return CitySearch::Failed;
            }
        };
        if !resp.ok() {
            log::warn!("{}", status_failed_message(SEARCH_ENDPOINT, resp.status()));
            return search_status_outcome(resp.status());
        }
        match resp.json::<Place>().await {
            Ok(place) => CitySearch::Found(place),
            Err(e) => {
                log::warn!("city search body unreadable: {e}");
                CitySearch::Failed
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        CitySearch::Failed
    }
}

/// Encyclopedia intro for an object name via `/api/encyclopedia/summary`.
/// Returns `None` on a miss, a failure, or on the server.
pub async fn fetch_summary(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SUMMARY_ENDPOINT)
            .query(summary_params(name))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            log::warn!("{}", status_failed_message(SUMMARY_ENDPOINT, resp.status()));
            return None;
        }
        resp.json::<Summary>().await.ok()?.extract
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
