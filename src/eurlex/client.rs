//! HTTP client creation and request handling for EUR-Lex pages.

use anyhow::Result;
use reqwest::header;
use tokio::time::{timeout, Duration};
use tracing::debug;

use crate::TARGET_WEB_REQUEST;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn create_http_client(user_agent: &str) -> Result<reqwest::Client> {
    debug!(target: TARGET_WEB_REQUEST, "Creating HTTP client with user agent '{}'", user_agent);

    reqwest::Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))
}

/// GET a page with the shared request timeout. A timeout comes back as a
/// plain error so callers can treat it like any other transport failure.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<reqwest::Response> {
    match timeout(
        REQUEST_TIMEOUT,
        client
            .get(url)
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send(),
    )
    .await
    {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(err)) => Err(anyhow::anyhow!("Request to {} failed: {}", url, err)),
        Err(_) => Err(anyhow::anyhow!(
            "Request to {} timed out after {} seconds",
            url,
            REQUEST_TIMEOUT.as_secs()
        )),
    }
}
