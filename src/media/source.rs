// SPDX-License-Identifier: MPL-2.0
//! Classification of image URIs into fetchable sources.

use crate::error::FetchError;
use std::path::PathBuf;
use url::Url;

/// Where the bytes of an image URI live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// `http://` or `https://` URL, fetched over the network.
    Remote(String),
    /// `file://` URI or bare filesystem path.
    Local(PathBuf),
}

impl ImageSource {
    /// Classifies `uri`.
    ///
    /// Schemes are matched case-insensitively. Anything with a scheme other
    /// than http, https or file is rejected. `file` URIs must name a local
    /// host (empty or `localhost`) and are percent-decoded.
    pub fn parse(uri: &str) -> Result<Self, FetchError> {
        let uri = uri.trim();
        let Some((scheme, _)) = uri.split_once("://") else {
            return Ok(Self::Local(PathBuf::from(uri)));
        };

        match scheme.to_ascii_lowercase().as_str() {
            "http" | "https" => Ok(Self::Remote(uri.to_string())),
            "file" => file_uri_to_path(uri).map(Self::Local),
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }
}

fn file_uri_to_path(uri: &str) -> Result<PathBuf, FetchError> {
    let url = Url::parse(uri).map_err(|err| FetchError::Io(format!("{uri}: {err}")))?;
    url.to_file_path().map_err(|()| FetchError::Io(format!("{uri}: not a local file")))
}
