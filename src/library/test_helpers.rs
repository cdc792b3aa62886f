//! Shared test helpers for creating PhotoLibrary instances against a mock server.

use crate::config::Config;
use crate::library::PhotoLibrary;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::MockServer;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

/// Bearer token every test request carries
pub(crate) const TOKEN: &str = "test-token";

/// Library pointed at `server`, with no categories so tests opt in explicitly
pub(crate) fn create_test_library(server: &MockServer) -> PhotoLibrary {
    create_test_library_with(server, |_| {})
}

/// Like [`create_test_library`], with a hook to adjust the config
pub(crate) fn create_test_library_with(
    server: &MockServer,
    adjust: impl FnOnce(&mut Config),
) -> PhotoLibrary {
    let mut config = Config {
        api_base_url: server.uri(),
        categories: Vec::new(),
        request_timeout: Duration::from_secs(5),
        ..Default::default()
    };
    adjust(&mut config);
    PhotoLibrary::new(config).unwrap()
}

pub(crate) fn album_json(id: &str, title: &str) -> Value {
    json!({"id": id, "title": title, "mediaItemsCount": "1"})
}

pub(crate) fn media_json(id: &str, base_url: &str) -> Value {
    json!({
        "id": id,
        "baseUrl": base_url,
        "mimeType": "image/jpeg",
        "filename": format!("{id}.JPG"),
        "mediaMetadata": {"width": "640", "height": "480"}
    })
}

pub(crate) fn album_page(albums: Vec<Value>, next_page_token: &str) -> Value {
    let mut page = json!({"albums": albums});
    if !next_page_token.is_empty() {
        page["nextPageToken"] = json!(next_page_token);
    }
    page
}

pub(crate) fn media_page(items: Vec<Value>, next_page_token: &str) -> Value {
    let mut page = json!({"mediaItems": items});
    if !next_page_token.is_empty() {
        page["nextPageToken"] = json!(next_page_token);
    }
    page
}

/// Answer media searches whose body contains `body` with a single page of `ids`
pub(crate) async fn mount_media_search(server: &MockServer, body: Value, ids: &[&str]) {
    let items = ids
        .iter()
        .map(|id| media_json(id, &format!("{}/content/{}", server.uri(), id)))
        .collect();
    Mock::given(method("POST"))
        .and(path("/mediaItems:search"))
        .and(body_partial_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(media_page(items, "")))
        .mount(server)
        .await;
}

pub(crate) fn album_body(album_id: &str) -> Value {
    json!({"albumId": album_id})
}

pub(crate) fn category_body(category: &str) -> Value {
    json!({"filters": {"contentFilter": {"includedContentCategories": [category]}}})
}

/// Number of requests the mock server has seen
pub(crate) async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
