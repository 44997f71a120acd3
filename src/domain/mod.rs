// SPDX-License-Identifier: MPL-2.0
//! Domain layer - gallery rules without any UI or I/O.
//!
//! Everything here is a pure function of its inputs so the gallery logic can
//! be tested without a renderer.
//!
//! # Modules
//!
//! - [`photo`]: [`Photo`] records and their [`PhotoId`]
//! - [`catalog`]: the validated, immutable [`Catalog`]
//! - [`tag`]: [`TagIndex`] derivation and the [`TagFilter`] selection
//! - [`viewer`]: the lightbox [`ViewerState`] machine and its [`ImageCursor`]

pub mod catalog;
pub mod photo;
pub mod tag;
pub mod viewer;

pub use catalog::Catalog;
pub use photo::{Photo, PhotoId};
pub use tag::{TagFilter, TagIndex, ALL_TAG};
pub use viewer::{ImageCursor, ViewerState};
