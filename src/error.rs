use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ScoutError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ScoutError::HttpError(_) => Some(
                "Check your internet connection, or pass a saved HTML file instead of a URL",
            ),
            ScoutError::UrlParseError(_) => Some(
                "Pass a full URL (https://...) or a path to a saved HTML file",
            ),
            ScoutError::CatalogError(_) => Some(
                "The listings service may have changed its response shape.\nCheck the base URL in your config file (`cellarscout init` shows its path)",
            ),
            ScoutError::ConfigError(_) => Some(
                "Run `cellarscout init` to write a fresh config file",
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
