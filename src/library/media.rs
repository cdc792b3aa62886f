//! Media search scoped to one album or one content filter.

use super::{PhotoLibrary, read_json, require_access_token};
use crate::error::{Error, Result};
use crate::pagination::{Page, paginate};
use crate::types::{Category, MediaItem};
use serde::{Deserialize, Serialize};

/// What a media search is restricted to
///
/// The service rejects requests carrying both an album id and filters, so the
/// two are separate variants rather than two optional fields.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaScope {
    /// Items in the album with this id
    Album(String),
    /// Items matching these filters across the whole library
    Filter(Filters),
}

impl MediaScope {
    /// Items in one album
    pub fn album(album_id: impl Into<String>) -> Self {
        Self::Album(album_id.into())
    }

    /// Items tagged with one content category
    pub fn category(category: Category) -> Self {
        Self::Filter(Filters {
            content_filter: Some(ContentFilter {
                included_content_categories: vec![category],
                excluded_content_categories: Vec::new(),
            }),
            date_filter: None,
        })
    }

    /// Phase name used in logs and errors
    pub fn describe(&self) -> String {
        match self {
            Self::Album(id) => format!("media search for album {}", id),
            Self::Filter(filters) => match &filters.content_filter {
                Some(content) if !content.included_content_categories.is_empty() => {
                    let labels: Vec<&str> = content
                        .included_content_categories
                        .iter()
                        .map(Category::as_str)
                        .collect();
                    format!("media search for category {}", labels.join(","))
                }
                _ => "filtered media search".to_string(),
            },
        }
    }

    fn request_body<'a>(&'a self, page_token: &'a str) -> SearchRequest<'a> {
        let (album_id, filters) = match self {
            Self::Album(id) => (Some(id.as_str()), None),
            Self::Filter(filters) => (None, Some(filters)),
        };
        SearchRequest {
            album_id,
            filters,
            page_token: (!page_token.is_empty()).then_some(page_token),
        }
    }
}

/// Search filters understood by the media-search endpoint
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Restrict by content category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_filter: Option<ContentFilter>,

    /// Restrict by capture date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateFilter>,
}

/// Content categories to include or exclude
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFilter {
    /// Item must carry at least one of these
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included_content_categories: Vec<Category>,

    /// Item must carry none of these
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_content_categories: Vec<Category>,
}

/// Capture dates to match, as exact (possibly partial) dates or ranges
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilter {
    /// Exact dates
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<Date>,

    /// Inclusive ranges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<DateRange>,
}

/// Calendar date; an unset component matches any value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct Date {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

/// Inclusive date range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct DateRange {
    pub start_date: Date,
    pub end_date: Date,
}

/// Request body for one page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    album_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a Filters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

/// Wire shape of one media-search page
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaPage {
    #[serde(default)]
    media_items: Vec<MediaItem>,
    #[serde(default)]
    next_page_token: String,
}

impl PhotoLibrary {
    /// Fetch every media record matching `scope`
    ///
    /// # Errors
    /// - [`Error::InvalidInput`] for an empty access token, before any request
    /// - [`Error::Transport`], [`Error::RemoteStatus`] or [`Error::Decode`] from
    ///   any page; records from earlier pages are discarded
    pub async fn search_media(
        &self,
        access_token: &str,
        scope: &MediaScope,
    ) -> Result<Vec<MediaItem>> {
        require_access_token(access_token)?;

        let description = scope.describe();
        let items = paginate(|page_token| {
            self.fetch_media_page(access_token, scope, &description, page_token)
        })
        .await?;

        tracing::debug!(scope = %description, items = items.len(), "media search complete");
        Ok(items)
    }

    async fn fetch_media_page(
        &self,
        access_token: &str,
        scope: &MediaScope,
        description: &str,
        page_token: String,
    ) -> Result<Page<MediaItem>> {
        let body = scope.request_body(&page_token);
        tracing::debug!(scope = %description, page_token = %page_token, "requesting media page");

        let response = self
            .http
            .post(self.config.media_search_endpoint())
            .timeout(self.config.request_timeout)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::transport(description, e))?;
        let page: MediaPage = read_json(response, description).await?;

        Ok(Page {
            items: page.media_items,
            next_page_token: page.next_page_token,
        })
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_album_scope_body() {
        let scope = MediaScope::album("a1");
        assert_eq!(
            serde_json::to_value(scope.request_body("")).unwrap(),
            json!({"albumId": "a1"})
        );
        assert_eq!(
            serde_json::to_value(scope.request_body("t2")).unwrap(),
            json!({"albumId": "a1", "pageToken": "t2"})
        );
    }

    #[test]
    fn test_category_scope_body() {
        let scope = MediaScope::category(Category::FOOD);
        assert_eq!(
            serde_json::to_value(scope.request_body("")).unwrap(),
            json!({"filters": {"contentFilter": {"includedContentCategories": ["FOOD"]}}})
        );
    }

    #[test]
    fn test_date_filter_body() {
        let scope = MediaScope::Filter(Filters {
            content_filter: Some(ContentFilter {
                included_content_categories: vec![],
                excluded_content_categories: vec![Category::new("SCREENSHOTS")],
            }),
            date_filter: Some(DateFilter {
                dates: vec![Date {
                    year: Some(2018),
                    month: Some(6),
                    day: None,
                }],
                ranges: vec![DateRange {
                    start_date: Date {
                        year: Some(2017),
                        month: Some(1),
                        day: Some(1),
                    },
                    end_date: Date {
                        year: Some(2017),
                        month: Some(12),
                        day: Some(31),
                    },
                }],
            }),
        });
        assert_eq!(
            serde_json::to_value(scope.request_body("")).unwrap(),
            json!({"filters": {
                "contentFilter": {"excludedContentCategories": ["SCREENSHOTS"]},
                "dateFilter": {
                    "dates": [{"year": 2018, "month": 6}],
                    "ranges": [{
                        "startDate": {"year": 2017, "month": 1, "day": 1},
                        "endDate": {"year": 2017, "month": 12, "day": 31}
                    }]
                }
            }})
        );
        assert_eq!(scope.describe(), "filtered media search");
    }

    #[test]
    fn test_describe_names_album_and_category() {
        assert_eq!(
            MediaScope::album("a1").describe(),
            "media search for album a1"
        );
        assert_eq!(
            MediaScope::category(Category::NIGHT).describe(),
            "media search for category NIGHT"
        );
    }
}
