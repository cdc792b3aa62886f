//! Concurrent download of catalog items to a local directory.

use super::PhotoLibrary;
use super::join::join_first_error;
use crate::error::{Error, Result};
use crate::types::CatalogItem;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

impl PhotoLibrary {
    /// Stream each item's binary content to `<destination>/<id>.jpg`
    ///
    /// The destination directory (and any missing parents) is created first;
    /// failing that, nothing is fetched. Then one task per item runs
    /// concurrently, capped by `max_concurrent_downloads` when configured.
    /// All tasks run to completion; the first failure is returned. Files
    /// already written, or partially written, are left in place.
    ///
    /// # Errors
    /// - [`Error::Filesystem`] if the directory or a file cannot be created or written
    /// - [`Error::InvalidInput`] if an item id is not usable as a file name
    /// - [`Error::Transport`] / [`Error::RemoteStatus`] from a content fetch
    pub async fn download_all(&self, items: &[CatalogItem], destination: &Path) -> Result<()> {
        tokio::fs::create_dir_all(destination)
            .await
            .map_err(|e| Error::filesystem(destination, e))?;

        let targets = items
            .iter()
            .map(|item| {
                Ok((
                    item.id().to_string(),
                    item.media.base_url.clone(),
                    destination.join(file_name_for(item.id())?),
                ))
            })
            .collect::<Result<Vec<(String, String, PathBuf)>>>()?;

        let limit = self
            .config
            .max_concurrent_downloads
            .map(|n| Arc::new(Semaphore::new(n)));
        let mut tasks: JoinSet<Result<()>> = JoinSet::new();

        for (id, url, path) in targets {
            let http = self.http.clone();
            let limit = limit.clone();
            tasks.spawn(async move {
                let _permit = match limit {
                    Some(semaphore) => Some(semaphore.acquire_owned().await.map_err(|e| {
                        Error::TaskFailed {
                            scope: format!("download of {}", id),
                            message: e.to_string(),
                        }
                    })?),
                    None => None,
                };
                let bytes = download_one(&http, &id, &url, &path).await?;
                tracing::debug!(id = %id, bytes, path = %path.display(), "downloaded media item");
                Ok(())
            });
        }

        join_first_error(&mut tasks, "download").await?;
        tracing::info!(
            items = items.len(),
            destination = %destination.display(),
            "download complete"
        );
        Ok(())
    }
}

/// `<id>.jpg`, refusing ids that would escape the destination directory
fn file_name_for(id: &str) -> Result<String> {
    if id.is_empty() || id == "." || id == ".." || id.contains(['/', '\\']) {
        return Err(Error::InvalidInput(format!(
            "media id '{}' cannot be used as a file name",
            id
        )));
    }
    Ok(format!("{}.jpg", id))
}

/// GET `url` and stream the body into `path`, returning the bytes written
async fn download_one(http: &reqwest::Client, id: &str, url: &str, path: &Path) -> Result<u64> {
    let scope = format!("download of {}", id);

    let mut response = http
        .get(url)
        .send()
        .await
        .map_err(|e| Error::transport(&scope, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::RemoteStatus {
            scope,
            status: status.to_string(),
        });
    }

    let mut file = tokio::fs::File::create(path)
        .await
        .map_err(|e| Error::filesystem(path, e))?;

    let mut written = 0u64;
    loop {
        let chunk = match response.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                // partial file stays on disk with everything received so far
                file.flush().await.ok();
                tracing::debug!(id = %id, bytes = written, "content stream broke");
                return Err(Error::transport(&scope, e));
            }
        };
        file.write_all(&chunk)
            .await
            .map_err(|e| Error::filesystem(path, e))?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(|e| Error::filesystem(path, e))?;

    Ok(written)
}
