#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let state = state::AppState::from_config(&config).expect("lookup clients init failed");

    let app = routes::leptos_app(state, &config).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "astromentor listening");
    axum::serve(listener, app).await.expect("server failed");
}
