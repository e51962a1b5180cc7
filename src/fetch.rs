//! Page retrieval over HTTP.

use std::time::Duration;

use once_cell::sync::Lazy;
use ureq::ResponseExt;

use crate::error::Result;

/// Default HTTP request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: Lazy<ureq::Agent> = Lazy::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
        .build()
        .into()
});

/// A fetched page snapshot.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// Final URL after redirects
    pub url: String,
    /// Raw HTML content
    pub html: String,
}

/// Fetch a page over HTTP. One GET, no retries, no script execution;
/// whatever the server returns is what gets scanned.
pub fn fetch_page(url: &str) -> Result<PageContent> {
    let response = HTTP_AGENT
        .get(url)
        .header("User-Agent", "Mozilla/5.0 (compatible; cellarscout/0.1)")
        .call()?;
    let final_url = response.get_uri().to_string();
    let html = response.into_body().read_to_string()?;

    Ok(PageContent {
        url: final_url,
        html,
    })
}
