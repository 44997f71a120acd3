// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! takes a `ViewContext` and emits its own `Message`, which the app maps into
//! domain transitions.
//!
//! # Components
//!
//! - [`header`] - App title and the tag filter dropdown
//! - [`gallery`] - Responsive grid of photo cards
//! - [`lightbox`] - Single-photo overlay with image navigation
//! - [`notifications`] - Dismissible warning banners
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`date`] - Long-form date display

pub mod date;
pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod lightbox;
pub mod notifications;
pub mod styles;
pub mod theming;
