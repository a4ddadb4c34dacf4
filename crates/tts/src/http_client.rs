use std::time::Duration;

use reqwest::Client;

use crate::error::TtsError;

/// Upper bound for a single synthesis call; long inputs take a while
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Build the HTTP client shared by every call of one provider instance
pub(crate) fn build_http_client() -> crate::error::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .user_agent(concat!("voxdrop/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
        .map_err(|e| TtsError::ConfigError(format!("failed to build HTTP client: {e}")))
}
