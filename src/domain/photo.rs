// SPDX-License-Identifier: MPL-2.0
//! Photo records as held by the catalog.

use std::fmt;

/// Stable identifier of a photo within its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(u32);

impl PhotoId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single gallery entry.
///
/// Display fields are opaque strings. `images` is the slideshow order and
/// is guaranteed non-empty once the photo is part of a
/// [`Catalog`](super::Catalog); a free-standing `Photo` is not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub equipment: String,
    /// Image URIs in slideshow order.
    pub images: Vec<String>,
    /// Labels in source order, without duplicates.
    pub tags: Vec<String>,
}

impl Photo {
    /// Image shown on the gallery card.
    #[must_use]
    pub fn cover(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Number of images beyond the cover, rendered as the `+N` badge.
    #[must_use]
    pub fn extra_image_count(&self) -> usize {
        self.images.len().saturating_sub(1)
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns the image at `index`, if any.
    #[must_use]
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a photo with placeholder display fields.
    pub fn photo(id: u32, tags: &[&str], images: &[&str]) -> Photo {
        Photo {
            id: PhotoId::new(id),
            title: format!("Photo {id}"),
            description: String::new(),
            date: "2024-01-01".to_string(),
            location: String::new(),
            equipment: String::new(),
            images: images.iter().map(|s| (*s).to_string()).collect(),
            tags: tags.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}
