// SPDX-License-Identifier: MPL-2.0
//! Catalog loading.
//!
//! The built-in catalog is embedded from `assets/catalog/photos.toml`. An
//! external TOML file with the same layout can replace it; when that file is
//! unusable the built-in catalog is used instead and a warning key is
//! returned for the UI. Relative image paths in an external file are resolved
//! against the file's directory.
//!
//! ```toml
//! [[photos]]
//! id = 1
//! title = "Andromeda Galaxy"
//! images = ["https://example.org/m31.jpg"]
//! tags = ["galaxy", "messier"]
//! ```

use crate::domain::{Catalog, Photo, PhotoId};
use crate::error::{CatalogError, Error, Result};
use crate::media::ImageSource;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/catalog/"]
struct Asset;

const BUILTIN_FILE: &str = "photos.toml";

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    BuiltIn,
    File(PathBuf),
}

impl CatalogSource {
    /// External file when a path is given, built-in otherwise.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::BuiltIn, Self::File)
    }
}

// =============================================================================
// Document Format
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    photos: Vec<PhotoRecord>,
}

#[derive(Debug, Deserialize)]
struct PhotoRecord {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    equipment: String,
    images: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<PhotoRecord> for Photo {
    fn from(record: PhotoRecord) -> Self {
        Photo {
            id: PhotoId::new(record.id),
            title: record.title,
            description: record.description,
            date: record.date,
            location: record.location,
            equipment: record.equipment,
            images: record.images,
            tags: record.tags,
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parses and validates a catalog document.
pub fn parse(content: &str) -> std::result::Result<Catalog, CatalogError> {
    Catalog::new(parse_photos(content)?)
}

fn parse_photos(content: &str) -> std::result::Result<Vec<Photo>, CatalogError> {
    let document: CatalogDocument =
        toml::from_str(content).map_err(|err| CatalogError::Parse(err.to_string()))?;
    Ok(document.photos.into_iter().map(Photo::from).collect())
}

/// Loads the catalog embedded in the binary.
pub fn load_builtin() -> Result<Catalog> {
    let file = Asset::get(BUILTIN_FILE)
        .ok_or_else(|| Error::Io(format!("missing embedded {BUILTIN_FILE}")))?;
    let content = String::from_utf8_lossy(file.data.as_ref());
    Ok(parse(&content)?)
}

/// Loads a catalog file from disk.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let mut photos = parse_photos(&content)?;
    if let Some(base) = path.parent() {
        for photo in &mut photos {
            resolve_relative_images(photo, base);
        }
    }
    Ok(Catalog::new(photos)?)
}

/// Rewrites bare relative image paths so they point inside `base`.
fn resolve_relative_images(photo: &mut Photo, base: &Path) {
    for uri in &mut photo.images {
        if let Ok(ImageSource::Local(local)) = ImageSource::parse(uri) {
            if local.is_relative() {
                *uri = base.join(local).to_string_lossy().into_owned();
            }
        }
    }
}

/// Loads the catalog for `source`.
///
/// Returns the catalog and, if an external file was rejected, the i18n key
/// of the warning to show. The built-in catalog is the fallback.
pub fn load(source: &CatalogSource) -> (Catalog, Option<String>) {
    match source {
        CatalogSource::BuiltIn => (builtin_or_empty(), None),
        CatalogSource::File(path) => match load_from_path(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), photos = catalog.len(), "loaded catalog");
                (catalog, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "catalog rejected, using built-in");
                let key = match &err {
                    Error::Catalog(catalog_err) => catalog_err.i18n_key(),
                    Error::Io(_) if !path.exists() => "error-catalog-not-found",
                    _ => "error-catalog-read",
                };
                (builtin_or_empty(), Some(key.to_string()))
            }
        },
    }
}

fn builtin_or_empty() -> Catalog {
    match load_builtin() {
        Ok(catalog) => {
            tracing::info!(photos = catalog.len(), "loaded built-in catalog");
            catalog
        }
        Err(err) => {
            tracing::error!(error = %err, "built-in catalog is invalid");
            Catalog::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagFilter;
    use tempfile::tempdir;

    #[test]
    fn builtin_catalog_has_the_three_deep_sky_entries() {
        let catalog = load_builtin().expect("built-in catalog parses");
        let titles: Vec<&str> = catalog.photos().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Andromeda Galaxy", "Orion Nebula", "Pleiades"]);
        assert_eq!(
            catalog.tag_index().as_slice(),
            ["all", "galaxy", "deep-sky", "messier", "nebula", "cluster"]
        );
        assert_eq!(catalog.filter(&TagFilter::Tag("messier".into())).len(), 3);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let catalog = parse(
            r#"
            [[photos]]
            id = 10
            title = "Moon"
            images = ["moon.png"]
            "#,
        )
        .expect("minimal record parses");
        let photo = &catalog.photos()[0];
        assert!(photo.tags.is_empty());
        assert!(photo.equipment.is_empty());
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = parse("").expect("empty document parses");
        assert!(catalog.is_empty());
    }

    #[test]
    fn record_without_images_is_rejected() {
        let err = parse(
            r#"
            [[photos]]
            id = 4
            title = "Void"
            images = []
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::EmptyImages {
                id: PhotoId::new(4)
            }
        );
    }

    #[test]
    fn record_missing_images_field_is_a_parse_error() {
        let err = parse("[[photos]]\nid = 1\ntitle = \"x\"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_falls_back_to_builtin_with_warning() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[photos]]\nid = 1\ntitle = \"a\"\nimages = [\"a\"]\n\n[[photos]]\nid = 1\ntitle = \"b\"\nimages = [\"b\"]\n",
        )
        .expect("write catalog");

        let (catalog, warning) = load(&CatalogSource::File(path));
        assert_eq!(catalog.len(), 3);
        assert_eq!(warning.as_deref(), Some("error-catalog-duplicate-id"));
    }

    #[test]
    fn load_missing_file_warns_with_not_found_key() {
        let dir = tempdir().expect("temp dir");
        let (catalog, warning) = load(&CatalogSource::File(dir.path().join("absent.toml")));
        assert!(!catalog.is_empty());
        assert_eq!(warning.as_deref(), Some("error-catalog-not-found"));
    }

    #[test]
    fn load_unreadable_file_warns_with_read_key() {
        let dir = tempdir().expect("temp dir");
        // A directory exists but cannot be read as a file
        let (_, warning) = load(&CatalogSource::File(dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some("error-catalog-read"));
    }

    #[test]
    fn malformed_file_warns_with_parse_key() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(&path, "[[photos]\nbroken").expect("write catalog");
        let (_, warning) = load(&CatalogSource::File(path));
        assert_eq!(warning.as_deref(), Some("error-catalog-parse"));
    }

    #[test]
    fn relative_images_resolve_against_catalog_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[photos]]\nid = 3\ntitle = \"Saturn\"\nimages = [\"shots/saturn.png\", \"/abs/ring.png\", \"https://example.org/s.jpg\"]\n",
        )
        .expect("write catalog");

        let catalog = load_from_path(&path).expect("catalog loads");
        let images = &catalog.photos()[0].images;
        assert_eq!(images[0], dir.path().join("shots/saturn.png").to_string_lossy());
        assert_eq!(images[1], "/abs/ring.png");
        assert_eq!(images[2], "https://example.org/s.jpg");
    }

    #[test]
    fn embedded_catalog_keeps_image_uris_verbatim() {
        let catalog = parse("[[photos]]\nid = 1\ntitle = \"m\"\nimages = [\"moon.png\"]\n")
            .expect("parses");
        assert_eq!(catalog.photos()[0].images, ["moon.png"]);
    }

    #[test]
    fn load_external_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[photos]]\nid = 7\ntitle = \"Jupiter\"\nimages = [\"j1.png\", \"j2.png\"]\ntags = [\"planet\"]\n",
        )
        .expect("write catalog");

        let (catalog, warning) = load(&CatalogSource::from_option(Some(path)));
        assert!(warning.is_none());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tag_index().as_slice(), ["all", "planet"]);
    }
}
