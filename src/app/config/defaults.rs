// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default height of a card's cover image, in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 256.0;

/// Minimum card cover height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 96.0;

/// Maximum card cover height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 512.0;

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Default number of decoded image handles kept in memory.
pub const DEFAULT_MEMORY_IMAGES: usize = 48;

/// Minimum in-memory image cache capacity.
pub const MIN_MEMORY_IMAGES: usize = 8;

/// Maximum in-memory image cache capacity.
pub const MAX_MEMORY_IMAGES: usize = 512;
