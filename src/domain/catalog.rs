// SPDX-License-Identifier: MPL-2.0
//! The immutable photo catalog.
//!
//! A [`Catalog`] is validated once at construction and never mutated
//! afterwards. The tag index is derived at the same time; filtered views are
//! recomputed on demand from the stored photos.

use super::photo::{Photo, PhotoId};
use super::tag::{TagFilter, TagIndex};
use crate::error::CatalogError;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    photos: Vec<Photo>,
    tag_index: TagIndex,
}

impl Catalog {
    /// Validates `photos` and builds the catalog.
    ///
    /// Photos with no images and duplicated ids are rejected. Repeated tags
    /// within a single photo are collapsed, keeping the first occurrence.
    pub fn new(mut photos: Vec<Photo>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(photos.len());

        for photo in &mut photos {
            if photo.images.is_empty() {
                return Err(CatalogError::EmptyImages { id: photo.id });
            }
            if !ids.insert(photo.id) {
                return Err(CatalogError::DuplicateId(photo.id));
            }
            dedup_in_order(&mut photo.tags);
        }

        let tag_index = TagIndex::build(&photos);
        Ok(Self { photos, tag_index })
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.id == id)
    }

    /// `"all"` followed by every distinct tag in first-encounter order.
    #[must_use]
    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    /// Photos passing `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &TagFilter) -> Vec<&Photo> {
        match filter {
            TagFilter::All => self.photos.iter().collect(),
            TagFilter::Tag(_) => self.photos.iter().filter(|p| filter.matches(p)).collect(),
        }
    }
}

fn dedup_in_order(tags: &mut Vec<String>) {
    let mut seen = HashSet::with_capacity(tags.len());
    tags.retain(|tag| seen.insert(tag.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::fixtures::photo;

    fn sample() -> Catalog {
        Catalog::new(vec![
            photo(1, &["nebula", "messier"], &["x", "y"]),
            photo(2, &["cluster"], &["z"]),
        ])
        .expect("valid catalog")
    }

    #[test]
    fn tag_index_matches_scenario() {
        let catalog = sample();
        assert_eq!(
            catalog.tag_index().as_slice(),
            ["all", "nebula", "messier", "cluster"]
        );
    }

    #[test]
    fn filter_by_tag_keeps_matching_photos_in_order() {
        let catalog = Catalog::new(vec![
            photo(1, &["nebula"], &["a"]),
            photo(2, &["cluster"], &["b"]),
            photo(3, &["nebula", "cluster"], &["c"]),
        ])
        .expect("valid catalog");

        let ids: Vec<u32> = catalog
            .filter(&TagFilter::Tag("nebula".into()))
            .iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filter_messier_returns_photo_a() {
        let catalog = sample();
        let filtered = catalog.filter(&TagFilter::Tag("messier".into()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, PhotoId::new(1));
    }

    #[test]
    fn filter_all_returns_whole_catalog() {
        let catalog = Catalog::new(vec![
            photo(1, &["nebula"], &["a"]),
            photo(2, &[], &["b"]),
        ])
        .expect("valid catalog");

        let all: Vec<&Photo> = catalog.filter(&TagFilter::All);
        let expected: Vec<&Photo> = catalog.photos().iter().collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn unknown_tag_filters_to_nothing() {
        let catalog = sample();
        assert!(catalog.filter(&TagFilter::Tag("planet".into())).is_empty());
    }

    #[test]
    fn filtering_is_stable() {
        let catalog = sample();
        let filter = TagFilter::Tag("cluster".into());
        assert_eq!(catalog.filter(&filter), catalog.filter(&filter));
    }

    #[test]
    fn rejects_photo_without_images() {
        let err = Catalog::new(vec![photo(4, &["nebula"], &[])]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyImages {
                id: PhotoId::new(4)
            }
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![photo(1, &[], &["a"]), photo(1, &[], &["b"])]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(PhotoId::new(1)));
    }

    #[test]
    fn repeated_tags_within_a_photo_are_collapsed() {
        let catalog =
            Catalog::new(vec![photo(1, &["nebula", "nebula", "messier"], &["a"])]).unwrap();
        assert_eq!(catalog.photos()[0].tags, vec!["nebula", "messier"]);
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::new(Vec::new()).expect("empty catalog is valid");
        assert!(catalog.is_empty());
        assert_eq!(catalog.tag_index().as_slice(), ["all"]);
        assert!(catalog.filter(&TagFilter::All).is_empty());
    }

    #[test]
    fn get_finds_photo_by_id() {
        let catalog = sample();
        assert_eq!(
            catalog.get(PhotoId::new(2)).map(|p| p.title.as_str()),
            Some("Photo 2")
        );
        assert!(catalog.get(PhotoId::new(99)).is_none());
    }
}
