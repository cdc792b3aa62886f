//! Core types for gphotos-dl
//!
//! Remote records ([`Album`], [`MediaItem`]) mirror the service's JSON shape and
//! are never mutated after decoding. [`CatalogItem`] wraps a media record with
//! the append-only provenance sets grown during catalog building.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Album as reported by the album-listing endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Persistent album identifier
    pub id: String,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Album page in the web UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    /// Base URL of the cover photo bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo_base_url: Option<String>,

    /// Media item used as cover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_photo_media_item_id: Option<String>,

    /// Whether the caller may add items to this album
    #[serde(default)]
    pub is_writeable: bool,

    /// Item count as reported by the service (a decimal string, not verified locally)
    #[serde(
        default,
        alias = "totalMediaItems",
        skip_serializing_if = "Option::is_none"
    )]
    pub media_items_count: Option<String>,
}

impl Album {
    /// Reported item count, if present and numeric
    pub fn item_count(&self) -> Option<u64> {
        self.media_items_count.as_deref()?.parse().ok()
    }
}

/// Content category label understood by the media-search filter
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(Cow<'static, str>);

#[allow(missing_docs)]
impl Category {
    pub const ANIMALS: Category = Category(Cow::Borrowed("ANIMALS"));
    pub const LANDMARKS: Category = Category(Cow::Borrowed("LANDMARKS"));
    pub const LANDSCAPES: Category = Category(Cow::Borrowed("LANDSCAPES"));
    pub const WEDDINGS: Category = Category(Cow::Borrowed("WEDDINGS"));
    pub const CITYSCAPES: Category = Category(Cow::Borrowed("CITYSCAPES"));
    pub const NIGHT: Category = Category(Cow::Borrowed("NIGHT"));
    pub const PEOPLE: Category = Category(Cow::Borrowed("PEOPLE"));
    pub const SELFIES: Category = Category(Cow::Borrowed("SELFIES"));
    pub const FOOD: Category = Category(Cow::Borrowed("FOOD"));
    pub const PERFORMANCES: Category = Category(Cow::Borrowed("PERFORMANCES"));
    pub const SPORT: Category = Category(Cow::Borrowed("SPORT"));
}

impl Category {
    /// Category with an arbitrary label (the service defines more than [`Category::known`])
    pub fn new(label: impl Into<String>) -> Self {
        Self(Cow::Owned(label.into()))
    }

    /// Label as sent to the service
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Categories queried by default when building a catalog
    pub fn known() -> Vec<Category> {
        vec![
            Self::ANIMALS,
            Self::LANDMARKS,
            Self::LANDSCAPES,
            Self::WEDDINGS,
            Self::CITYSCAPES,
            Self::NIGHT,
            Self::PEOPLE,
            Self::SELFIES,
            Self::FOOD,
            Self::PERFORMANCES,
            Self::SPORT,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

/// Photo or video record returned by media search
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Persistent media identifier, stable between sessions
    pub id: String,

    /// User-supplied description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Item page in the web UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    /// URL of the binary content
    #[serde(default)]
    pub base_url: String,

    /// MIME type, e.g. `image/jpeg`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Original filename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// Capture metadata
    #[serde(default)]
    pub media_metadata: MediaMetadata,

    /// Who added the item (shared albums only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributor_info: Option<ContributorInfo>,
}

/// Dimensions, capture time and camera details of a media item
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    /// Width in pixels (decimal string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Height in pixels (decimal string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,

    /// When the item was captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    /// Present for photos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<PhotoMetadata>,

    /// Present for videos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoMetadata>,
}

/// Camera details of a photo
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct PhotoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aperture_f_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_equivalent: Option<f64>,
    /// Exposure duration, e.g. `"0.008s"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<String>,
}

/// Camera details and processing status of a video
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    /// Processing status, e.g. `READY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Contributor of an item in a shared album
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ContributorInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Provenance attached to a media record when it is merged into the catalog
///
/// A discovery comes from exactly one album, exactly one category, or neither.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    /// Found by a search scoped to this album
    Album(Album),
    /// Found by a search scoped to this content category
    Category(Category),
    /// No provenance recorded
    Untagged,
}

/// Deduplicated catalog entry: one remote media record plus every album and
/// category it was discovered under
///
/// Both sets only grow and never hold duplicates (albums compare by id).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// The remote record, serialized inline
    #[serde(flatten)]
    pub media: MediaItem,

    /// Albums this item was found in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub albums: Vec<Album>,

    /// Categories this item was found under
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
}

impl CatalogItem {
    /// Wrap a remote record with empty provenance
    pub fn new(media: MediaItem) -> Self {
        Self {
            media,
            albums: Vec::new(),
            categories: Vec::new(),
        }
    }

    /// Remote media identifier
    pub fn id(&self) -> &str {
        &self.media.id
    }

    /// Whether this item was found in the album with the given id
    pub fn in_album(&self, album_id: &str) -> bool {
        self.albums.iter().any(|a| a.id == album_id)
    }

    /// Merge one provenance tag (set union). Returns true if a set grew.
    pub fn tag(&mut self, tag: &Tag) -> bool {
        match tag {
            Tag::Album(album) => {
                if self.in_album(&album.id) {
                    return false;
                }
                self.albums.push(album.clone());
                true
            }
            Tag::Category(category) => {
                if self.categories.contains(category) {
                    return false;
                }
                self.categories.push(category.clone());
                true
            }
            Tag::Untagged => false,
        }
    }
}
