//! Album listing and title filtering.

use super::{PhotoLibrary, read_json, require_access_token};
use crate::error::{Error, Result};
use crate::pagination::{Page, paginate};
use crate::types::Album;
use serde::Deserialize;
use std::collections::HashSet;

const SCOPE: &str = "album listing";

/// Wire shape of one album-listing page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlbumPage {
    #[serde(default)]
    albums: Vec<Album>,
    #[serde(default)]
    next_page_token: String,
}

impl PhotoLibrary {
    /// Fetch every album, optionally restricted to the given titles
    ///
    /// With an empty `titles` the full listing is returned as received.
    /// Otherwise only albums whose title is in `titles` are kept, in first-seen
    /// order and deduplicated by album id.
    ///
    /// # Errors
    /// Fails on an empty access token (before any request) and surfaces any
    /// transport, status or decode failure of any page.
    pub async fn resolve_albums(
        &self,
        access_token: &str,
        titles: &[String],
    ) -> Result<Vec<Album>> {
        require_access_token(access_token)?;

        let albums =
            paginate(|page_token| self.fetch_album_page(access_token, page_token)).await?;
        let total = albums.len();
        let filtered = filter_to_titles(albums, titles);

        tracing::debug!(albums = filtered.len(), total, "resolved album list");
        Ok(filtered)
    }

    async fn fetch_album_page(
        &self,
        access_token: &str,
        page_token: String,
    ) -> Result<Page<Album>> {
        tracing::debug!(page_token = %page_token, "requesting album page");

        let mut request = self
            .http
            .get(self.config.albums_endpoint())
            .timeout(self.config.request_timeout)
            .bearer_auth(access_token);
        if !page_token.is_empty() {
            request = request.query(&[("pageToken", page_token.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(SCOPE, e))?;
        let page: AlbumPage = read_json(response, SCOPE).await?;

        Ok(Page {
            items: page.albums,
            next_page_token: page.next_page_token,
        })
    }
}

/// Keep albums whose title is in `titles`, first occurrence of each id only
///
/// An empty `titles` returns `albums` untouched.
pub fn filter_to_titles(albums: Vec<Album>, titles: &[String]) -> Vec<Album> {
    if titles.is_empty() {
        return albums;
    }

    let wanted: HashSet<&str> = titles.iter().map(String::as_str).collect();
    let mut seen_ids = HashSet::new();
    albums
        .into_iter()
        .filter(|album| wanted.contains(album.title.as_str()))
        .filter(|album| seen_ids.insert(album.id.clone()))
        .collect()
}
