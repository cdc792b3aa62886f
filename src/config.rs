//! Configuration types for gphotos-dl

use crate::error::{Error, Result};
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default photo library API root
pub const DEFAULT_API_BASE_URL: &str = "https://photoslibrary.googleapis.com/v1";

/// Main configuration for [`PhotoLibrary`](crate::PhotoLibrary)
///
/// Every field has a serde default, so an empty document (or `Config::default()`)
/// talks to the public API with the full known-category fan-out.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// API root; album listing is `{api_base_url}/albums` and media search is
    /// `{api_base_url}/mediaItems:search`
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Content categories queried during catalog building (default: [`Category::known`])
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    /// Connect timeout for every request, and the overall deadline of each album
    /// or media-search page (default: 30s). Content downloads have no overall
    /// deadline.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum concurrent binary downloads (None = one task per item, no cap)
    #[serde(default)]
    pub max_concurrent_downloads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            categories: default_categories(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
            max_concurrent_downloads: None,
        }
    }
}

impl Config {
    /// Check settings that would otherwise fail late, in the middle of a run
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_base_url).map_err(|e| Error::Config {
            message: format!("invalid API base URL '{}': {}", self.api_base_url, e),
            key: Some("api_base_url".to_string()),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!("unsupported URL scheme '{}'", parsed.scheme()),
                key: Some("api_base_url".to_string()),
            });
        }
        if self.max_concurrent_downloads == Some(0) {
            return Err(Error::Config {
                message: "max_concurrent_downloads must be at least 1".to_string(),
                key: Some("max_concurrent_downloads".to_string()),
            });
        }
        Ok(())
    }

    /// Album listing endpoint
    pub fn albums_endpoint(&self) -> String {
        format!("{}/albums", self.api_base_url.trim_end_matches('/'))
    }

    /// Media search endpoint
    pub fn media_search_endpoint(&self) -> String {
        format!("{}/mediaItems:search", self.api_base_url.trim_end_matches('/'))
    }
}

/// Per-run input for [`PhotoLibrary::fetch_list`](crate::PhotoLibrary::fetch_list)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FetchParams {
    /// OAuth2 bearer token (required, must be non-empty)
    pub access_token: String,

    /// Album titles restricting the catalog; empty means every album
    #[serde(default)]
    pub album_titles: Vec<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_categories() -> Vec<Category> {
    Category::known()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("gphotos-dl/", env!("CARGO_PKG_VERSION")).to_string()
}
