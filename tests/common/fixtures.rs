//! Mock photo library fixtures

use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer token the mock endpoints expect
pub const TEST_TOKEN: &str = "integration-token";

/// Binary content served for every media item
pub fn content_for(id: &str) -> Vec<u8> {
    format!("JPEG bytes of {id}").into_bytes()
}

/// Serve a two-page album listing with the given `(id, title)` pairs split across pages
pub async fn mount_album_listing(server: &MockServer, albums: &[(&str, &str)]) {
    let to_json = |pairs: &[(&str, &str)]| -> Vec<Value> {
        pairs
            .iter()
            .map(|(id, title)| json!({"id": id, "title": title, "mediaItemsCount": "0"}))
            .collect()
    };
    let (first, second) = albums.split_at(albums.len() / 2);

    Mock::given(method("GET"))
        .and(path("/albums"))
        .and(wiremock::matchers::query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "albums": to_json(first),
            "nextPageToken": "albums-2"
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/albums"))
        .and(wiremock::matchers::query_param("pageToken", "albums-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "albums": to_json(second)
        })))
        .mount(server)
        .await;
}

/// Serve a media search (matched on a partial body) returning `ids`, with content URLs on `server`
pub async fn mount_search(server: &MockServer, body: Value, ids: &[&str]) {
    let items: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "baseUrl": format!("{}/content/{}", server.uri(), id),
                "mimeType": "image/jpeg",
                "mediaMetadata": {
                    "creationTime": "2019-06-01T12:00:00Z",
                    "width": "4032",
                    "height": "3024",
                    "photo": {"cameraMake": "Pixel", "isoEquivalent": 100}
                }
            })
        })
        .collect();
    Mock::given(method("POST"))
        .and(path("/mediaItems:search"))
        .and(body_partial_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"mediaItems": items})))
        .mount(server)
        .await;
}

/// Serve binary content for each id
pub async fn mount_content(server: &MockServer, ids: &[&str]) {
    for id in ids {
        Mock::given(method("GET"))
            .and(path(format!("/content/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(content_for(id)))
            .mount(server)
            .await;
    }
}

/// Partial request body selecting one album
pub fn album_search(album_id: &str) -> Value {
    json!({"albumId": album_id})
}

/// Partial request body selecting one category
pub fn category_search(label: &str) -> Value {
    json!({"filters": {"contentFilter": {"includedContentCategories": [label]}}})
}
