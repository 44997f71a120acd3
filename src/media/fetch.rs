// SPDX-License-Identifier: MPL-2.0
//! Fetching image bytes from the network or the filesystem.
//!
//! Remote responses are optionally written to a disk cache named after the
//! BLAKE3 hash of the URI, so later sessions skip the network. Entries are
//! written to a `.part` file and renamed into place, so an interrupted write
//! never leaves a truncated entry behind.

use super::source::ImageSource;
use crate::error::FetchError;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = concat!("AstroGallery/", env!("CARGO_PKG_VERSION"));
const PARTIAL_EXTENSION: &str = "part";

/// Loads image bytes for any supported URI.
///
/// Cheap to clone; the HTTP client shares its connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    disk_cache: Option<PathBuf>,
}

impl Fetcher {
    /// Builds a fetcher; `disk_cache` is the directory for cached downloads.
    pub fn new(disk_cache: Option<PathBuf>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client, disk_cache })
    }

    /// Fetches the raw bytes behind `uri`.
    pub async fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        match ImageSource::parse(uri)? {
            ImageSource::Local(path) => Ok(tokio::fs::read(&path).await?),
            ImageSource::Remote(url) => self.fetch_remote(&url).await,
        }
    }

    /// Fetches `uri` and wraps the bytes in an Iced image handle.
    pub async fn fetch_handle(self, uri: String) -> Result<Handle, FetchError> {
        self.fetch(&uri).await.map(Handle::from_bytes)
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let cached_path = self.disk_cache.as_deref().map(|dir| cache_path(dir, url));

        if let Some(path) = &cached_path {
            if let Ok(bytes) = tokio::fs::read(path).await {
                tracing::debug!(url, path = %path.display(), "image served from disk cache");
                return Ok(bytes);
            }
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?.to_vec();
        tracing::debug!(url, bytes = bytes.len(), "image downloaded");

        if let Some(path) = &cached_path {
            if let Err(err) = write_cache_entry(path, &bytes).await {
                tracing::warn!(path = %path.display(), error = %err, "cannot write image cache entry");
            }
        }

        Ok(bytes)
    }
}

/// Location of the cache entry for `url` inside `dir`.
#[must_use]
pub fn cache_path(dir: &Path, url: &str) -> PathBuf {
    dir.join(blake3::hash(url.as_bytes()).to_hex().as_str())
}

async fn write_cache_entry(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let partial = path.with_extension(PARTIAL_EXTENSION);
    tokio::fs::write(&partial, bytes).await?;
    if let Err(err) = tokio::fs::rename(&partial, path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_bare_local_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("m45.png");
        std::fs::write(&path, b"pleiades").expect("write image");

        let fetcher = Fetcher::new(None).expect("client");
        let bytes = fetcher
            .fetch(path.to_str().expect("utf-8 path"))
            .await
            .expect("local read");
        assert_eq!(bytes, b"pleiades");
    }

    #[tokio::test]
    async fn reads_file_uri() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("m42.png");
        std::fs::write(&path, b"orion").expect("write image");

        let fetcher = Fetcher::new(None).expect("client");
        let uri = format!("file://{}", path.display());
        assert_eq!(fetcher.fetch(&uri).await.expect("local read"), b"orion");
    }

    #[tokio::test]
    async fn missing_local_file_is_io_error() {
        let dir = tempdir().expect("temp dir");
        let fetcher = Fetcher::new(None).expect("client");
        let uri = dir.path().join("absent.png");
        let err = fetcher
            .fetch(uri.to_str().expect("utf-8 path"))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
        assert_eq!(err.i18n_key(), "error-image-io");
    }

    #[tokio::test]
    async fn unsupported_scheme_fails_before_any_io() {
        let fetcher = Fetcher::new(None).expect("client");
        let err = fetcher.fetch("gopher://example.org/x").await.unwrap_err();
        assert_eq!(err, FetchError::UnsupportedScheme("gopher".into()));
    }

    #[tokio::test]
    async fn remote_fetch_is_served_from_disk_cache() {
        let dir = tempdir().expect("temp dir");
        // Port 9 (discard) is never contacted: the cache entry wins
        let url = "http://127.0.0.1:9/m31.jpg";
        std::fs::write(cache_path(dir.path(), url), b"andromeda").expect("seed cache");

        let fetcher = Fetcher::new(Some(dir.path().to_path_buf())).expect("client");
        assert_eq!(fetcher.fetch(url).await.expect("cache hit"), b"andromeda");
    }

    #[tokio::test]
    async fn cache_entry_is_renamed_into_place() {
        let dir = tempdir().expect("temp dir");
        let path = cache_path(&dir.path().join("image-cache"), "https://example.org/m45.jpg");

        write_cache_entry(&path, b"pleiades").await.expect("write entry");

        assert_eq!(std::fs::read(&path).expect("entry exists"), b"pleiades");
        assert!(!path.with_extension(PARTIAL_EXTENSION).exists());
    }

    #[tokio::test]
    async fn leftover_partial_entry_is_not_served() {
        let dir = tempdir().expect("temp dir");
        // Nothing listens on port 9, so only a cache hit could succeed
        let url = "http://127.0.0.1:9/m33.jpg";
        let partial = cache_path(dir.path(), url).with_extension(PARTIAL_EXTENSION);
        std::fs::write(&partial, b"trunc").expect("seed partial entry");

        let fetcher = Fetcher::new(Some(dir.path().to_path_buf())).expect("client");
        assert!(matches!(fetcher.fetch(url).await, Err(FetchError::Http(_))));
    }

    #[test]
    fn cache_path_is_stable_and_distinct() {
        let dir = Path::new("/cache");
        let a = cache_path(dir, "https://example.org/a.jpg");
        assert_eq!(a, cache_path(dir, "https://example.org/a.jpg"));
        assert_ne!(a, cache_path(dir, "https://example.org/b.jpg"));
        assert_eq!(a.parent(), Some(dir));
    }
}
