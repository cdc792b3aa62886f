//! Test configuration helpers for loading .env credentials and creating test libraries

use gphotos_dl::{Category, Config, PhotoLibrary};
use std::time::Duration;
use wiremock::MockServer;

/// Error type for test configuration
#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Load the OAuth2 access token for live tests
///
/// Required environment variables:
/// - `GOOGLE_OAUTH_ACCESS_TOKEN` - Bearer token with photoslibrary.readonly scope
pub fn load_access_token() -> Result<String, ConfigError> {
    dotenvy::dotenv().ok();

    let token = std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN").map_err(|_| {
        ConfigError("GOOGLE_OAUTH_ACCESS_TOKEN not set in environment".to_string())
    })?;
    if token.trim().is_empty() {
        return Err(ConfigError(
            "GOOGLE_OAUTH_ACCESS_TOKEN is empty".to_string(),
        ));
    }
    Ok(token)
}

/// Check if live credentials are available
pub fn has_live_credentials() -> bool {
    load_access_token().is_ok()
}

/// Library against the public API with only the given categories
pub fn create_live_library(categories: Vec<Category>) -> PhotoLibrary {
    PhotoLibrary::new(Config {
        categories,
        request_timeout: Duration::from_secs(60),
        ..Default::default()
    })
    .unwrap()
}

/// Library against a mock server with only the given categories
pub fn create_mock_library(server: &MockServer, categories: Vec<Category>) -> PhotoLibrary {
    PhotoLibrary::new(Config {
        api_base_url: server.uri(),
        categories,
        request_timeout: Duration::from_secs(5),
        ..Default::default()
    })
    .unwrap()
}
