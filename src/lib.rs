// SPDX-License-Identifier: MPL-2.0
//! `astro_gallery` is an astrophotography gallery built with the Iced GUI
//! framework.
//!
//! It shows a catalog of photos as a tag-filterable grid and browses each
//! photo's images in a lightbox, with Fluent localization and TOML settings.

#![doc(html_root_url = "https://docs.rs/astro_gallery/0.1.0")]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
