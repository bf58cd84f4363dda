//! Shared plumbing for outbound lookup services.
//!
//! Both the geocoder and the encyclopedia talk to public HTTP APIs that
//! expect an identifying `User-Agent`. One client builder and one
//! request helper keep timeouts and status handling consistent.

use std::time::Duration;

use crate::config::LookupTimeouts;

/// Errors from upstream lookup services.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request failed before a response arrived.
    #[error("lookup request failed: {0}")]
    Request(String),

    /// The upstream returned a non-success HTTP status.
    #[error("lookup response error: status {status}")]
    Status { status: u16, body: String },

    /// The upstream body did not have the expected shape.
    #[error("lookup response parse failed: {0}")]
    Parse(String),
}

/// Build a `reqwest` client with the configured timeouts and `User-Agent`.
///
/// # Errors
///
/// Returns [`LookupError::HttpClientBuild`] when the TLS backend or the
/// header value is rejected.
pub fn http_client(user_agent: &str, timeouts: LookupTimeouts) -> Result<reqwest::Client, LookupError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LookupError::HttpClientBuild(e.to_string()))
}

/// GET `url` with `query` and return the body text of a 2xx response.
pub(crate) async fn get_text(
    http: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<String, LookupError> {
    let response = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| LookupError::Request(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| LookupError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(LookupError::Status { status: status.as_u16(), body: text });
    }
    Ok(text)
}
