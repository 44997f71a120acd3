// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox for one photo.
//!
//! Renders over the grid with a dimmed backdrop. Clicking the backdrop or the
//! close button closes it. Previous/next buttons and position dots only
//! appear when the photo has more than one image.

use crate::domain::{ImageCursor, Photo};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::date::long_date;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::{picture, tag_chips};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, opaque, tooltip, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photo: &'a Photo,
    pub cursor: ImageCursor,
    pub images: &'a ImageCache,
    /// Height available to the image, in logical pixels.
    pub image_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    Previous,
    Next,
    Jump(usize),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(title_bar(&ctx))
        .push(image_area(&ctx));
    if let Some(dots) = navigation_dots(&ctx) {
        content = content.push(dots);
    }
    content = content.push(details(&ctx));

    let body = Container::new(content)
        .padding(spacing::LG)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::container::modal);

    let centered = Container::new(opaque(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new().push(backdrop).push(centered).into()
}

fn title_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = tooltip(
        button(Text::new("✕").size(typography::BODY_LG))
            .on_press(Message::Close)
            .padding(spacing::XS)
            .style(styles::button::overlay),
        Text::new(ctx.i18n.tr("modal-close")).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.photo.title.as_str()).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(close)
        .into()
}

fn image_area<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let height = Length::Fixed(ctx.image_height);
    let uri = ctx.photo.image(ctx.cursor.index()).unwrap_or_default();
    let mut stack = Stack::new().push(picture(
        ctx.i18n,
        ctx.images,
        uri,
        height,
        ContentFit::Contain,
    ));

    if ctx.cursor.len() > 1 {
        let previous = nav_button("‹", ctx.i18n.tr("modal-previous"), Message::Previous);
        let next = nav_button("›", ctx.i18n.tr("modal-next"), Message::Next);
        stack = stack.push(
            Row::new()
                .width(Length::Fill)
                .height(height)
                .padding(spacing::SM)
                .align_y(Vertical::Center)
                .push(previous)
                .push(Space::new().width(Length::Fill))
                .push(next),
        );
    }

    stack.into()
}

fn nav_button<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    tooltip(
        button(
            Container::new(Text::new(glyph).size(typography::TITLE_LG))
                .width(Length::Fixed(sizing::ICON_LG))
                .height(Length::Fixed(sizing::ICON_LG))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::overlay),
        Text::new(label).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .into()
}

fn navigation_dots<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let len = ctx.cursor.len();
    if len <= 1 {
        return None;
    }

    let dots = (0..len).map(|index| {
        let active = index == ctx.cursor.index();
        let width = if active {
            sizing::DOT_ACTIVE_WIDTH
        } else {
            sizing::DOT
        };
        button(Space::new().width(Length::Fixed(width)).height(Length::Fixed(sizing::DOT)))
            .on_press(Message::Jump(index))
            .padding(0)
            .style(styles::button::dot(active))
            .into()
    });

    let position = Text::new(ctx.i18n.tr_with_args(
        "modal-image-position",
        &[
            ("current", &(ctx.cursor.index() + 1).to_string()),
            ("total", &len.to_string()),
        ],
    ))
    .size(typography::CAPTION);

    Some(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(Row::with_children(dots).spacing(spacing::XS).align_y(Vertical::Center))
            .push(position)
            .into(),
    )
}

fn details<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo = ctx.photo;
    let mut column = Column::new().spacing(spacing::SM);

    if !photo.description.is_empty() {
        column = column.push(Text::new(photo.description.as_str()).size(typography::BODY_LG));
    }

    let fields = [
        ("modal-date-label", long_date(ctx.i18n, &photo.date)),
        ("modal-location-label", photo.location.clone()),
        ("modal-equipment-label", photo.equipment.clone()),
    ];
    for (label_key, value) in fields {
        if value.is_empty() {
            continue;
        }
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(format!("{}:", ctx.i18n.tr(label_key))).size(typography::BODY))
                .push(Text::new(value).size(typography::BODY)),
        );
    }

    if !photo.tags.is_empty() {
        column = column.push(tag_chips(&photo.tags));
    }

    column.into()
}
