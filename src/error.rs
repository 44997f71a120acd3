// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error types.
//!
//! Errors carry owned strings rather than source errors so they stay `Clone`
//! and can travel inside Iced messages.

use crate::domain::PhotoId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Catalog Error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Fetch Error: {0}")]
    Fetch(#[from] FetchError),
}

/// Reasons a catalog is refused before it reaches the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog document is not valid TOML or misses required fields.
    #[error("invalid catalog document: {0}")]
    Parse(String),

    /// A photo declares no images; cursor arithmetic needs at least one.
    #[error("photo {id} has no images")]
    EmptyImages { id: PhotoId },

    /// Two photos share the same identifier.
    #[error("duplicate photo id {0}")]
    DuplicateId(PhotoId),
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Parse(_) => "error-catalog-parse",
            CatalogError::EmptyImages { .. } => "error-catalog-empty-images",
            CatalogError::DuplicateId(_) => "error-catalog-duplicate-id",
        }
    }
}

/// Failures while fetching image bytes for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connection reset...).
    #[error("request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Local file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The URI scheme is neither http(s), file, nor a bare path.
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Http(_) => "error-image-network",
            FetchError::Status(404) => "error-image-not-found",
            FetchError::Status(_) => "error-image-status",
            FetchError::Io(_) => "error-image-io",
            FetchError::UnsupportedScheme(_) => "error-image-unsupported",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Http(err.to_string()),
        }
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
