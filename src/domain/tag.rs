// SPDX-License-Identifier: MPL-2.0
//! Tag index and tag filter.
//!
//! The tag index lists the synthetic [`ALL_TAG`] first, followed by every
//! distinct tag of the catalog in first-encounter order. The filter is the
//! user's current pick among those entries.

use super::photo::Photo;
use std::collections::HashSet;

/// Synthetic tag that selects the whole catalog.
pub const ALL_TAG: &str = "all";

// =============================================================================
// Tag Index
// =============================================================================

/// Ordered, duplicate-free list of selectable tags, starting with [`ALL_TAG`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    /// Derives the index from photos in catalog order.
    ///
    /// An empty slice yields `["all"]`. A photo tag spelled `"all"` is folded
    /// into the leading entry rather than repeated.
    #[must_use]
    pub fn build(photos: &[Photo]) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(ALL_TAG);

        let mut tags = vec![ALL_TAG.to_string()];
        for tag in photos.iter().flat_map(|photo| photo.tags.iter()) {
            if seen.insert(tag.as_str()) {
                tags.push(tag.clone());
            }
        }

        Self { tags }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Number of entries, including [`ALL_TAG`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always `false`: the index holds at least [`ALL_TAG`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Default for TagIndex {
    fn default() -> Self {
        Self::build(&[])
    }
}

// =============================================================================
// Tag Filter
// =============================================================================

/// The currently selected tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    /// Every photo matches.
    #[default]
    All,
    /// Only photos carrying this tag match.
    Tag(String),
}

impl TagFilter {
    /// Maps a tag-index entry to a filter; [`ALL_TAG`] becomes [`TagFilter::All`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TAG {
            Self::All
        } else {
            Self::Tag(label.to_string())
        }
    }

    /// The tag-index entry this filter corresponds to.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TAG,
            Self::Tag(tag) => tag,
        }
    }

    /// Returns `true` if the photo passes this filter.
    ///
    /// `All` is not a tag lookup: it matches photos that carry no tags at all.
    #[must_use]
    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => photo.has_tag(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::fixtures::photo;

    #[test]
    fn empty_catalog_yields_only_all() {
        let index = TagIndex::build(&[]);
        assert_eq!(index.as_slice(), ["all"]);
        assert_eq!(TagIndex::default(), index);
    }

    #[test]
    fn tags_follow_first_encounter_order() {
        let photos = vec![
            photo(1, &["nebula", "messier"], &["x", "y"]),
            photo(2, &["cluster"], &["z"]),
            photo(3, &["messier", "galaxy", "nebula"], &["w"]),
        ];
        let index = TagIndex::build(&photos);
        assert_eq!(
            index.as_slice(),
            ["all", "nebula", "messier", "cluster", "galaxy"]
        );
    }

    #[test]
    fn every_tag_appears_exactly_once() {
        let photos = vec![
            photo(1, &["a", "b"], &["x"]),
            photo(2, &["b", "c"], &["x"]),
            photo(3, &["c", "a"], &["x"]),
        ];
        let index = TagIndex::build(&photos);
        for tag in ["a", "b", "c"] {
            assert_eq!(index.iter().filter(|t| *t == tag).count(), 1);
        }
        assert_eq!(index.iter().next(), Some(ALL_TAG));
    }

    #[test]
    fn literal_all_tag_is_not_repeated() {
        let photos = vec![photo(1, &["all", "planet"], &["x"])];
        let index = TagIndex::build(&photos);
        assert_eq!(index.as_slice(), ["all", "planet"]);
    }

    #[test]
    fn filter_label_round_trips_through_index_entries() {
        assert_eq!(TagFilter::from_label("all"), TagFilter::All);
        assert_eq!(
            TagFilter::from_label("nebula"),
            TagFilter::Tag("nebula".into())
        );
        assert_eq!(TagFilter::Tag("nebula".into()).label(), "nebula");
        assert_eq!(TagFilter::All.label(), ALL_TAG);
    }

    #[test]
    fn all_matches_untagged_photos() {
        let untagged = photo(1, &[], &["x"]);
        assert!(TagFilter::All.matches(&untagged));
        assert!(!TagFilter::Tag("nebula".into()).matches(&untagged));
    }
}
