// SPDX-License-Identifier: MPL-2.0
//! Responsive photo grid.
//!
//! Each card shows the cover image, a `+N` badge when the photo has more
//! images, the title, description, date, location and tags. Clicking a card
//! asks the parent to open the lightbox.

use crate::domain::{Photo, PhotoId};
use crate::i18n::fluent::I18n;
use crate::media::{ImageCache, ImageStatus};
use crate::ui::date::long_date;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image, Column, Container, Row, Space, Stack, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub photos: Vec<&'a Photo>,
    pub images: &'a ImageCache,
    pub columns: usize,
    pub thumbnail_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open(PhotoId),
}

/// Number of grid columns for a window `width` in logical pixels.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < sizing::BREAKPOINT_MD {
        1
    } else if width < sizing::BREAKPOINT_LG {
        2
    } else {
        3
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.photos.is_empty() {
        return empty_state(ctx.i18n);
    }

    let columns = ctx.columns.max(1);
    let rows = ctx.photos.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::LG);
        for &photo in chunk {
            row = row.push(Container::new(card(&ctx, photo)).width(Length::FillPortion(1)));
        }
        // Pad the last row so its cards keep the column width
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        row.into()
    });

    Column::with_children(rows)
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("gallery-empty")).size(typography::BODY_LG))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, photo: &'a Photo) -> Element<'a, Message> {
    let mut cover = Stack::new().push(cover_image(ctx, photo));

    let extra = photo.extra_image_count();
    if extra > 0 {
        let badge = Container::new(
            Text::new(
                ctx.i18n
                    .tr_with_args("card-extra-images", &[("count", &extra.to_string())]),
            )
            .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge);

        cover = cover.push(
            Container::new(badge)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top),
        );
    }

    let mut body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(Text::new(photo.title.as_str()).size(typography::TITLE_MD));

    if !photo.description.is_empty() {
        body = body.push(Text::new(photo.description.as_str()).size(typography::BODY));
    }

    let meta: Vec<String> = [long_date(ctx.i18n, &photo.date), photo.location.clone()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if !meta.is_empty() {
        body = body.push(Text::new(meta.join(" · ")).size(typography::CAPTION));
    }

    if !photo.tags.is_empty() {
        body = body.push(tag_chips(&photo.tags));
    }

    let content = Container::new(Column::new().push(cover).push(body))
        .width(Length::Fill)
        .style(styles::container::panel);

    button(content)
        .on_press(Message::Open(photo.id))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}

fn cover_image<'a>(ctx: &ViewContext<'a>, photo: &'a Photo) -> Element<'a, Message> {
    match photo.cover() {
        Some(uri) => picture(
            ctx.i18n,
            ctx.images,
            uri,
            Length::Fixed(ctx.thumbnail_height),
            ContentFit::Cover,
        ),
        None => placeholder(String::new(), Length::Fixed(ctx.thumbnail_height)),
    }
}

/// Tag chips, wrapping onto new lines when the card is narrow.
pub fn tag_chips<'a, M: 'a>(tags: &'a [String]) -> Element<'a, M> {
    let chips = tags.iter().map(|tag| {
        Container::new(Text::new(tag.as_str()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::chip)
            .into()
    });

    Row::with_children(chips)
        .spacing(spacing::XS)
        .wrap()
        .into()
}

/// Image for `uri` as currently known to the cache.
///
/// Loading and failed images render as a placeholder of the same height.
pub fn picture<'a, M: 'a>(
    i18n: &I18n,
    images: &'a ImageCache,
    uri: &str,
    height: Length,
    fit: ContentFit,
) -> Element<'a, M> {
    match images.status(uri) {
        Some(ImageStatus::Ready(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(fit)
            .into(),
        Some(ImageStatus::Failed(key)) => placeholder(i18n.tr(key), height),
        Some(ImageStatus::Loading) | None => placeholder(i18n.tr("image-loading"), height),
    }
}

fn placeholder<'a, M: 'a>(label: String, height: Length) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_windows_use_one_column() {
        assert_eq!(columns_for_width(0.0), 1);
        assert_eq!(columns_for_width(767.9), 1);
    }

    #[test]
    fn medium_windows_use_two_columns() {
        assert_eq!(columns_for_width(768.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
    }

    #[test]
    fn wide_windows_use_three_columns() {
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(2560.0), 3);
    }
}
