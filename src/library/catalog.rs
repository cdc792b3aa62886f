//! Concurrent catalog building: one search task per album and per category,
//! all merged into a single deduplicated index.

use super::join::join_first_error;
use super::media::MediaScope;
use super::{PhotoLibrary, require_access_token};
use crate::error::Result;
use crate::types::{Album, CatalogItem, Category, MediaItem, Tag};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;

/// Media records keyed by remote id, merged under a single lock
///
/// Every upsert holds the lock for its whole read-modify-write, so concurrent
/// discoveries of the same item always land on one entry. Tag insertion is a
/// set union, which makes the final tags independent of arrival order.
#[derive(Debug, Default)]
pub struct Catalog {
    items: Mutex<HashMap<String, CatalogItem>>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `media` if its id is new, then merge `tag` into its provenance
    ///
    /// The record of the first discovery is kept; later records for the same
    /// id only contribute their tag.
    pub async fn upsert(&self, media: MediaItem, tag: &Tag) {
        let mut items = self.items.lock().await;
        items
            .entry(media.id.clone())
            .or_insert_with(|| CatalogItem::new(media))
            .tag(tag);
    }

    /// Number of distinct items
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    /// Whether no item has been merged yet
    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }

    /// Consume the catalog into its final item list (unordered)
    ///
    /// With `require_album` set, items not found in any album are dropped.
    pub fn into_snapshot(self, require_album: bool) -> Vec<CatalogItem> {
        self.items
            .into_inner()
            .into_values()
            .filter(|item| !require_album || !item.albums.is_empty())
            .collect()
    }

    /// Copy of the current item list (unordered), filtered like [`Catalog::into_snapshot`]
    pub async fn snapshot(&self, require_album: bool) -> Vec<CatalogItem> {
        self.items
            .lock()
            .await
            .values()
            .filter(|item| !require_album || !item.albums.is_empty())
            .cloned()
            .collect()
    }
}

impl PhotoLibrary {
    /// Search every album and every category concurrently and merge the results
    ///
    /// One task is spawned per album (tagging its results with that album) and
    /// one per category (tagging with that category), all in the same wave.
    /// Once every task has finished, the first failure (if any) is returned and
    /// the partially built catalog is dropped. Otherwise the snapshot is
    /// returned, restricted to items with at least one album when
    /// `require_album_membership` is set. Order is unspecified.
    pub async fn build_catalog(
        &self,
        access_token: &str,
        albums: &[Album],
        categories: &[Category],
        require_album_membership: bool,
    ) -> Result<Vec<CatalogItem>> {
        require_access_token(access_token)?;

        let catalog = Arc::new(Catalog::new());
        let access_token: Arc<str> = Arc::from(access_token);
        let mut tasks: JoinSet<Result<()>> = JoinSet::new();

        for album in albums {
            let library = self.clone();
            let catalog = catalog.clone();
            let access_token = access_token.clone();
            let scope = MediaScope::album(album.id.clone());
            let title = album.title.clone();
            let tag = Tag::Album(album.clone());
            tasks.spawn(async move {
                let items = library.search_media(&access_token, &scope).await?;
                tracing::info!(
                    media_items = items.len(),
                    album = %title,
                    "received media items for album"
                );
                for item in items {
                    catalog.upsert(item, &tag).await;
                }
                Ok(())
            });
        }

        for category in categories {
            let library = self.clone();
            let catalog = catalog.clone();
            let access_token = access_token.clone();
            let scope = MediaScope::category(category.clone());
            let tag = Tag::Category(category.clone());
            let label = category.clone();
            tasks.spawn(async move {
                let items = library.search_media(&access_token, &scope).await?;
                tracing::info!(
                    media_items = items.len(),
                    category = %label,
                    "received media items for category"
                );
                for item in items {
                    catalog.upsert(item, &tag).await;
                }
                Ok(())
            });
        }

        join_first_error(&mut tasks, "catalog fan-out").await?;

        let snapshot = match Arc::try_unwrap(catalog) {
            Ok(catalog) => catalog.into_snapshot(require_album_membership),
            Err(shared) => shared.snapshot(require_album_membership).await,
        };
        tracing::debug!(
            items = snapshot.len(),
            require_album_membership,
            "catalog built"
        );
        Ok(snapshot)
    }
}
