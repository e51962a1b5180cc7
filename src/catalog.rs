//! Catalog entries and the remote listings client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, ScoutError};

/// Request timeout for listings fetches, in seconds.
const CATALOG_TIMEOUT_SECS: u64 = 30;

/// An authoritative product record from the reference catalog.
/// Read-only to the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub price_usd: f64,
    pub image_url: Option<String>,
    pub animation_url: Option<String>,
}

/// Wire shape of one search hit: an `_id` plus a `_source` document.
#[derive(Debug, Deserialize)]
struct ListingHit {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    #[serde(rename = "_source")]
    source: ListingSource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListingSource {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    animation_url: Option<String>,
}

/// Parse a listings response body into catalog entries.
///
/// Hits missing an id, name, or price are skipped rather than failing
/// the whole page; a body that is not a hit array is a catalog error.
pub fn parse_listings(body: &str) -> Result<Vec<CatalogEntry>> {
    let hits: Vec<ListingHit> = serde_json::from_str(body)
        .map_err(|e| ScoutError::CatalogError(format!("unexpected listings response: {}", e)))?;
    Ok(hits.into_iter().filter_map(entry_from_hit).collect())
}

fn entry_from_hit(hit: ListingHit) -> Option<CatalogEntry> {
    let ListingHit { id, source } = hit;
    let ListingSource {
        id: source_id,
        name,
        price,
        image_url,
        animation_url,
    } = source;
    Some(CatalogEntry {
        id: id.or(source_id)?,
        name: name?,
        price_usd: price?,
        image_url,
        animation_url,
    })
}

/// Client for the remote listings search endpoint.
///
/// Constructed explicitly from config by the composition root and
/// passed where needed; holds no global state. Rate limiting, token
/// refresh, and retries are the caller's concern.
pub struct CatalogClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: Option<String>,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(CATALOG_TIMEOUT_SECS)))
            .build()
            .into();
        Self {
            agent,
            base_url: config.catalog.base_url.clone(),
            api_key: config.catalog.api_key.clone(),
        }
    }

    /// Fetch one page of listed entries (offset-paginated).
    pub fn fetch_listings(&self, from: usize, size: usize) -> Result<Vec<CatalogEntry>> {
        let url = format!(
            "{}/search/listings?from={}&size={}&listed=true",
            self.base_url.trim_end_matches('/'),
            from,
            size
        );
        let mut request = self.agent.get(&url);
        if let Some(ref key) = self.api_key {
            request = request.header("Authorization", &format!("Bearer {}", key));
        }
        let body = request.call()?.into_body().read_to_string()?;
        parse_listings(&body)
    }
}
