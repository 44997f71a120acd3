// SPDX-License-Identifier: MPL-2.0
//! Image loading for the gallery.
//!
//! URIs from the catalog are classified by [`source`], fetched by
//! [`fetch`] and tracked per URI in the LRU [`cache`].

pub mod cache;
pub mod fetch;
pub mod source;

pub use cache::{CacheStats, ImageCache, ImageStatus};
pub use fetch::Fetcher;
pub use source::ImageSource;
