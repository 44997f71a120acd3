// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` files are embedded
//! from `assets/i18n/` at build time and may be overridden at runtime with
//! `--i18n-dir`.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime overrides from a translation directory
//! - Fallback to `en-US` when a key is missing in the active locale

pub mod fluent;
