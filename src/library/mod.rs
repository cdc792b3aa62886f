//! Photo library client split into focused submodules.
//!
//! The `PhotoLibrary` struct and its methods are organized by phase:
//! - [`albums`] - Album listing and title filtering
//! - [`media`] - Media search by album or content filter
//! - [`catalog`] - Concurrent fan-out and deduplicating merge
//! - [`download`] - Concurrent binary download to disk
//! - [`join`] - First-error-wins join over fan-out tasks

pub mod albums;
pub mod catalog;
mod download;
mod join;
pub mod media;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use crate::config::{Config, FetchParams};
use crate::error::{Error, Result};
use crate::types::CatalogItem;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for one remote photo library API
///
/// Cloning is cheap: the HTTP connection pool and configuration are shared, so
/// every fan-out task gets its own handle.
#[derive(Clone, Debug)]
pub struct PhotoLibrary {
    /// HTTP client shared by all requests
    pub(crate) http: reqwest::Client,
    /// Configuration (immutable for the lifetime of the client)
    pub(crate) config: Arc<Config>,
}

impl PhotoLibrary {
    /// Create a client after validating the configuration
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        // Content downloads carry no overall deadline; JSON pages set their own
        let http = reqwest::Client::builder()
            .connect_timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to create HTTP client: {}", e),
                key: None,
            })?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the full catalog for one run
    ///
    /// Resolves albums (restricted to `params.album_titles` when given), then
    /// fans out over those albums and the configured categories. When titles
    /// were given, only items found in at least one of the named albums are
    /// returned.
    pub async fn fetch_list(&self, params: &FetchParams) -> Result<Vec<CatalogItem>> {
        require_access_token(&params.access_token)?;

        let albums = self
            .resolve_albums(&params.access_token, &params.album_titles)
            .await?;
        tracing::info!(albums = albums.len(), "received album list");

        self.build_catalog(
            &params.access_token,
            &albums,
            &self.config.categories,
            !params.album_titles.is_empty(),
        )
        .await
    }
}

/// Reject an empty bearer token before any request is built
pub(crate) fn require_access_token(access_token: &str) -> Result<()> {
    if access_token.trim().is_empty() {
        return Err(Error::InvalidInput("access token is empty".to_string()));
    }
    Ok(())
}

/// Check the status, then decode the whole body as JSON
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    scope: &str,
) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::RemoteStatus {
            scope: scope.to_string(),
            status: status.to_string(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| Error::transport(scope, e))?;

    serde_json::from_slice(&body).map_err(|e| Error::decode(scope, e))
}
