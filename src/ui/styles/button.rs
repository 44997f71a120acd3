// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Header filter toggle.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Dropdown entry. The active tag is highlighted with the brand color.
pub fn menu_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);

        let background = match (active, status) {
            (true, _) => Some(palette::PRIMARY_500),
            (false, button::Status::Hovered) => Some(if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            }),
            _ => None,
        };
        let text_color = if active || !is_light {
            WHITE
        } else {
            palette::GRAY_900
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Translucent round buttons drawn over the lightbox image.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Whole-card click target; keeps the card surface visible.
pub fn card(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        border: Border {
            color: if status == button::Status::Hovered {
                palette::PRIMARY_400
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::NONE
        },
        ..Default::default()
    }
}

/// Image position dot under the lightbox image.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            WHITE
        } else if status == button::Status::Hovered {
            Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            }
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Borderless text button used for dismiss actions.
pub fn text(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.text;
    button::Style {
        background: None,
        text_color: if status == button::Status::Hovered {
            palette::PRIMARY_400
        } else {
            base
        },
        ..Default::default()
    }
}
