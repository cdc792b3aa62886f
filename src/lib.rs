//! # gphotos-dl
//!
//! Concurrent catalog builder and downloader for a remote photo library.
//!
//! ## How a run works
//!
//! 1. **Albums** are listed page by page and optionally narrowed to a set of titles.
//! 2. **Fan-out**: one media search per album and one per content category run
//!    concurrently. Every result is merged into a single catalog keyed by media
//!    id, so an item found in two albums and a category is one entry carrying
//!    all three tags.
//! 3. **Download** (optional): each catalog item's content is streamed to
//!    `<dir>/<id>.jpg`, all items concurrently.
//!
//! Any failure in a fan-out fails the whole operation: the caller never sees a
//! partial catalog. Nothing is retried.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gphotos_dl::{Config, FetchParams, PhotoLibrary};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let library = PhotoLibrary::new(Config::default())?;
//!
//!     let items = library
//!         .fetch_list(&FetchParams {
//!             access_token: std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN")?,
//!             album_titles: vec!["Trip".to_string()],
//!         })
//!         .await?;
//!
//!     println!("{}", serde_json::to_string(&items)?);
//!     library.download_all(&items, "photos".as_ref()).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Photo library client: albums, media search, catalog, download
pub mod library;
/// Continuation-token pagination
pub mod pagination;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use config::{Config, FetchParams};
pub use error::{Error, Result};
pub use library::PhotoLibrary;
pub use library::catalog::Catalog;
pub use library::media::{ContentFilter, Date, DateFilter, DateRange, Filters, MediaScope};
pub use types::{Album, CatalogItem, Category, MediaItem, Tag};
