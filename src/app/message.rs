// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::FetchError;
use crate::ui::{gallery, header, lightbox, notifications};
use iced::widget::image::Handle;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::NotificationMessage),
    /// A fetch started for `uri` finished.
    ImageLoaded {
        uri: String,
        result: Result<Handle, FetchError>,
    },
    Shortcut(Shortcut),
    WindowResized(Size),
}

/// Keyboard shortcuts understood by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Closes the filter menu, or the lightbox when no menu is open.
    Escape,
    Previous,
    Next,
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file, overriding `gallery.catalog_path`.
    pub catalog: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (image cache).
    /// Takes precedence over `ASTRO_GALLERY_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ASTRO_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
