// SPDX-License-Identifier: MPL-2.0
//! Lightbox viewer state machine.
//!
//! ```text
//! Closed ──select(p)──▶ Open(p, 0)
//! Open(p, i) ──next──▶ Open(p, (i + 1) mod len)
//! Open(p, i) ──prev──▶ Open(p, (i + len - 1) mod len)
//! Open(p, i) ──jump(j)──▶ Open(p, j)        if j < len
//! Open(p, i) ──close──▶ Closed
//! ```
//!
//! Transitions take the state by value and return the successor, so the
//! machine can be driven without any rendering layer.

use super::photo::{Photo, PhotoId};
use std::num::NonZeroUsize;

// =============================================================================
// ImageCursor
// =============================================================================

/// Active image index within a photo, always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCursor {
    index: usize,
    len: NonZeroUsize,
}

impl ImageCursor {
    /// Cursor on the first of `len` images.
    #[must_use]
    pub fn first(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len.get()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len.get(),
            ..self
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let len = self.len.get();
        Self {
            index: (self.index + len - 1) % len,
            ..self
        }
    }

    /// Moves to `index`, or stays put when it is out of range.
    #[must_use]
    pub fn jump(self, index: usize) -> Self {
        if index < self.len.get() {
            Self { index, ..self }
        } else {
            self
        }
    }

    /// Indices of the images adjacent to the cursor, wrapping around.
    ///
    /// Empty for a single image; one entry when both neighbours coincide.
    #[must_use]
    pub fn neighbours(self) -> Vec<usize> {
        let next = self.next().index;
        let prev = self.prev().index;
        let mut out = Vec::with_capacity(2);
        if next != self.index {
            out.push(next);
        }
        if prev != self.index && prev != next {
            out.push(prev);
        }
        out
    }
}

// =============================================================================
// ViewerState
// =============================================================================

/// Which photo, if any, is open in the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { photo: PhotoId, cursor: ImageCursor },
}

impl ViewerState {
    /// Opens `photo` on its first image, from any state.
    ///
    /// A photo without images leaves the state unchanged; catalogs reject
    /// such photos so this only guards hand-built values.
    #[must_use]
    pub fn select(self, photo: &Photo) -> Self {
        match NonZeroUsize::new(photo.image_count()) {
            Some(len) => Self::Open {
                photo: photo.id,
                cursor: ImageCursor::first(len),
            },
            None => self,
        }
    }

    #[must_use]
    pub fn close(self) -> Self {
        Self::Closed
    }

    #[must_use]
    pub fn next(self) -> Self {
        self.map_cursor(ImageCursor::next)
    }

    #[must_use]
    pub fn prev(self) -> Self {
        self.map_cursor(ImageCursor::prev)
    }

    #[must_use]
    pub fn jump(self, index: usize) -> Self {
        self.map_cursor(|cursor| cursor.jump(index))
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn photo_id(&self) -> Option<PhotoId> {
        match self {
            Self::Open { photo, .. } => Some(*photo),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> Option<ImageCursor> {
        match self {
            Self::Open { cursor, .. } => Some(*cursor),
            Self::Closed => None,
        }
    }

    /// Active image index; `0` when closed.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor().map_or(0, ImageCursor::index)
    }

    /// Prev/next/dot controls are only offered for multi-image photos.
    #[must_use]
    pub fn shows_navigation(&self) -> bool {
        self.cursor().is_some_and(|cursor| cursor.len() > 1)
    }

    fn map_cursor(self, f: impl FnOnce(ImageCursor) -> ImageCursor) -> Self {
        match self {
            Self::Open { photo, cursor } => Self::Open {
                photo,
                cursor: f(cursor),
            },
            Self::Closed => Self::Closed,
        }
    }
}
