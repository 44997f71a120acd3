// SPDX-License-Identifier: MPL-2.0
//! Design tokens: colors, spacing, sizes and radii shared by every view.
//!
//! Views never hard-code these values; they pull them from here so the grid,
//! header and lightbox keep consistent proportions.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Night-sky grays, darkest first
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);

    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.75;
    pub const OVERLAY_PRESSED: f32 = 0.85;
    /// Card and panel surfaces
    pub const SURFACE: f32 = 0.95;
    /// Lightbox backdrop
    pub const BACKDROP: f32 = 0.9;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_LG: f32 = 32.0;

    /// Width of the tag dropdown panel.
    pub const FILTER_MENU_WIDTH: f32 = 192.0;
    /// Widest the lightbox gets on large windows.
    pub const MODAL_MAX_WIDTH: f32 = 1152.0;
    /// Share of the window height given to the lightbox image.
    pub const MODAL_IMAGE_HEIGHT_RATIO: f32 = 0.7;

    /// Navigation dot, inactive and active widths.
    pub const DOT: f32 = 8.0;
    pub const DOT_ACTIVE_WIDTH: f32 = 16.0;

    /// Window width at which the grid switches to two columns.
    pub const BREAKPOINT_MD: f32 = 768.0;
    /// Window width at which the grid switches to three columns.
    pub const BREAKPOINT_LG: f32 = 1024.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name in the header, photo title in the lightbox
    pub const TITLE_LG: f32 = 24.0;
    /// Card titles
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Tag chips, image count badges
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::BREAKPOINT_LG > sizing::BREAKPOINT_MD);
    assert!(sizing::DOT_ACTIVE_WIDTH > sizing::DOT);
    assert!(sizing::MODAL_IMAGE_HEIGHT_RATIO > 0.0 && sizing::MODAL_IMAGE_HEIGHT_RATIO < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
};
