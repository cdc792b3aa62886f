//! Continuation-token pagination shared by album listing and media search

use crate::error::Result;
use std::future::Future;

/// One page of a paginated endpoint
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Token for the next page; empty on the last page
    pub next_page_token: String,
}

/// Fetch every page and concatenate the items in page order
///
/// `fetch_page` receives the continuation token, an empty string for the first
/// page, and is called again with each returned token until one comes back
/// empty. The first error aborts the walk and nothing collected so far is
/// returned. There is no page limit: a source that never returns an empty token
/// is followed forever.
pub async fn paginate<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page_token = String::new();
    let mut pages = 0usize;

    loop {
        let page = fetch_page(page_token).await?;
        pages += 1;
        items.extend(page.items);
        if page.next_page_token.is_empty() {
            break;
        }
        page_token = page.next_page_token;
    }

    tracing::debug!(pages, items = items.len(), "pagination complete");
    Ok(items)
}
