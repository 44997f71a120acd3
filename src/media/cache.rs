// SPDX-License-Identifier: MPL-2.0
//! In-memory image cache keyed by URI.
//!
//! Every URI the UI asks for gets an entry that moves from `Loading` to
//! either `Ready` or `Failed`. URIs currently on screen are pinned and never
//! evicted; the rest are evicted least-recently-used first once the
//! configured capacity is reached.
//!
//! ```ignore
//! cache.pin(visible_uris);
//! if cache.begin_request(uri) {
//!     // spawn the fetch; call `cache.complete(uri, result)` when it returns
//! }
//! ```

use crate::error::FetchError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::{HashMap, HashSet};
use std::num::NonZeroUsize;

/// Load state of one image URI.
#[derive(Debug, Clone)]
pub enum ImageStatus {
    Loading,
    Ready(Handle),
    /// i18n key describing the failure.
    Failed(&'static str),
}

/// Counters for cache behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub requests: u64,
    pub hits: u64,
    pub failures: u64,
}

pub struct ImageCache {
    pins: HashSet<String>,
    /// Entries for pinned URIs, outside the LRU.
    pinned: HashMap<String, ImageStatus>,
    entries: LruCache<String, ImageStatus>,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("pinned", &self.pinned.len())
            .field("len", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("stats", &self.stats)
            .finish()
    }
}

impl ImageCache {
    /// Creates a cache holding at most `capacity` unpinned entries (minimum
    /// one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            pins: HashSet::new(),
            pinned: HashMap::new(),
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Current status of `uri` without touching recency.
    #[must_use]
    pub fn status(&self, uri: &str) -> Option<&ImageStatus> {
        self.pinned.get(uri).or_else(|| self.entries.peek(uri))
    }

    /// Decoded handle for `uri` if it finished loading.
    #[must_use]
    pub fn handle(&self, uri: &str) -> Option<&Handle> {
        match self.status(uri) {
            Some(ImageStatus::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Replaces the set of pinned URIs.
    ///
    /// Pinned entries are never evicted. Entries that lose their pin go back
    /// into the LRU as most recently used.
    pub fn pin<I>(&mut self, uris: I)
    where
        I: IntoIterator<Item = String>,
    {
        let pins: HashSet<String> = uris.into_iter().collect();

        let released: Vec<String> = self
            .pinned
            .keys()
            .filter(|uri| !pins.contains(*uri))
            .cloned()
            .collect();
        for uri in released {
            if let Some(status) = self.pinned.remove(&uri) {
                self.entries.put(uri, status);
            }
        }

        for uri in &pins {
            if let Some(status) = self.entries.pop(uri) {
                self.pinned.insert(uri.clone(), status);
            }
        }

        self.pins = pins;
    }

    /// Registers interest in `uri`.
    ///
    /// Returns `true` when the caller must start a fetch. Known URIs, including
    /// ones already loading or failed, are only promoted in LRU order.
    pub fn begin_request(&mut self, uri: &str) -> bool {
        if self.pinned.contains_key(uri) || self.entries.get(uri).is_some() {
            self.stats.hits += 1;
            return false;
        }
        self.stats.requests += 1;
        self.store(uri, ImageStatus::Loading);
        true
    }

    /// Records the outcome of a fetch started by [`Self::begin_request`].
    pub fn complete(&mut self, uri: &str, result: Result<Handle, FetchError>) {
        let status = match result {
            Ok(handle) => ImageStatus::Ready(handle),
            Err(err) => {
                tracing::warn!(uri, error = %err, "image fetch failed");
                self.stats.failures += 1;
                ImageStatus::Failed(err.i18n_key())
            }
        };
        self.store(uri, status);
    }

    /// Drops a failed entry so the next request fetches again.
    pub fn forget_failure(&mut self, uri: &str) {
        if !matches!(self.status(uri), Some(ImageStatus::Failed(_))) {
            return;
        }
        self.pinned.remove(uri);
        self.entries.pop(uri);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pinned.len() + self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn store(&mut self, uri: &str, status: ImageStatus) {
        if self.pins.contains(uri) {
            self.pinned.insert(uri.to_string(), status);
        } else {
            self.entries.put(uri.to_string(), status);
        }
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(crate::app::config::DEFAULT_MEMORY_IMAGES)
    }
}
