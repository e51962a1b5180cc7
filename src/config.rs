use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, ScoutError};

/// Default listings service base URL.
const DEFAULT_BASE_URL: &str = "https://services.baxus.co/api";
/// Default catalog page size.
const DEFAULT_PAGE_SIZE: usize = 20;
/// Default base URL for per-entry asset links in the report.
const DEFAULT_ASSET_URL: &str = "https://baxus.co/asset";

/// Global cellarscout configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Catalog service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Listings service base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional bearer token for the listings service
    #[serde(default)]
    pub api_key: Option<String>,

    /// Page size for offset-paginated listing fetches
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Base URL for per-entry asset links shown in the report
    #[serde(default = "default_asset_url")]
    pub asset_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_asset_url() -> String {
    DEFAULT_ASSET_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            page_size: default_page_size(),
            asset_url: default_asset_url(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ScoutError::ConfigError(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Path of the config file in the platform config directory
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "cellarscout").ok_or_else(|| {
            ScoutError::ConfigError("Could not determine config directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Entry page URL on the catalog site
    pub fn asset_link(&self, entry_id: &str) -> String {
        format!(
            "{}/{}",
            self.catalog.asset_url.trim_end_matches('/'),
            entry_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.page_size, 20);
        assert!(config.catalog.api_key.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[catalog]\napi_key = \"secret\"\n").unwrap();
        assert_eq!(config.catalog.api_key.as_deref(), Some("secret"));
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.page_size, 20);
    }

    #[test]
    fn test_asset_link() {
        let config = Config::default();
        assert_eq!(config.asset_link("abc123"), "https://baxus.co/asset/abc123");
    }
}
