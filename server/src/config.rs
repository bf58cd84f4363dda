//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";
pub const DEFAULT_LOOKUP_USER_AGENT: &str = "astromentor/0.1";
pub const DEFAULT_LOOKUP_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOOKUP_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub nominatim_base_url: String,
    pub wikipedia_api_url: String,
    pub user_agent: String,
    pub timeouts: LookupTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ASSETS_DIR`: engine bundle and sky data root, default `../public`
    /// - `NOMINATIM_BASE_URL`: geocoding service base URL
    /// - `WIKIPEDIA_API_URL`: `MediaWiki` action API endpoint
    /// - `LOOKUP_USER_AGENT`: sent with every outbound lookup
    /// - `LOOKUP_REQUEST_TIMEOUT_SECS`: default 10
    /// - `LOOKUP_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let assets_dir = var("ASSETS_DIR").map_or_else(default_assets_dir, PathBuf::from);

        let nominatim_base_url = base_url(var("NOMINATIM_BASE_URL"), DEFAULT_NOMINATIM_BASE_URL);
        let wikipedia_api_url = base_url(var("WIKIPEDIA_API_URL"), DEFAULT_WIKIPEDIA_API_URL);

        let user_agent = var("LOOKUP_USER_AGENT").unwrap_or_else(|| DEFAULT_LOOKUP_USER_AGENT.to_string());
        if user_agent.trim().is_empty() {
            return Err(ConfigError::Empty { var: "LOOKUP_USER_AGENT" });
        }

        let timeouts = LookupTimeouts {
            request_secs: parse_u64(var("LOOKUP_REQUEST_TIMEOUT_SECS"), DEFAULT_LOOKUP_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(var("LOOKUP_CONNECT_TIMEOUT_SECS"), DEFAULT_LOOKUP_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, assets_dir, nominatim_base_url, wikipedia_api_url, user_agent, timeouts })
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("public")
}

fn base_url(raw: Option<String>, default: &str) -> String {
    raw.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
