//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the lookup proxy endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. The sky engine bundle,
//! its catalog data, and fonts are served as static files beside the app.

pub mod encyclopedia;
pub mod geocode;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::services::lookup::LookupError;
use crate::state::AppState;

/// Static trees served from the assets directory, as `(mount, subdir)`.
pub const ASSET_MOUNTS: [(&str, &str); 3] = [
    ("/stellarium-web-engine", "stellarium-web-engine"),
    ("/test-skydata", "test-skydata"),
    ("/static", "static"),
];

/// Lookup proxy routes and health check.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/geocode/reverse", get(geocode::reverse))
        .route("/api/geocode/search", get(geocode::search))
        .route("/api/encyclopedia/summary", get(encyclopedia::summary))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Map an upstream failure to the status returned to the browser.
pub(crate) fn lookup_error_to_status(err: &LookupError) -> StatusCode {
    tracing::warn!(error = %err, "upstream lookup failed");
    StatusCode::BAD_GATEWAY
}

/// Full application: API routes, Leptos SSR pages, and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded. The
/// `LEPTOS_*` environment is normally set by `cargo leptos` from the
/// workspace metadata.
pub fn leptos_app(state: AppState, config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos build output (WASM, CSS, JS) lives under the site root.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let mut app = api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    for (mount, subdir) in ASSET_MOUNTS {
        let dir = config.assets_dir.join(subdir);
        if !dir.is_dir() {
            tracing::warn!(path = %dir.display(), mount, "asset directory missing");
        }
        app = app.nest_service(mount, ServeDir::new(dir));
    }

    Ok(app
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
