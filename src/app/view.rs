// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid always renders; the lightbox is stacked on top while the viewer
//! is open.

use super::Message;
use crate::domain::{Catalog, ImageCursor, Photo, TagFilter, ViewerState};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::sizing;
use crate::ui::{gallery, header, lightbox, notifications};
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub filter: &'a TagFilter,
    pub viewer: ViewerState,
    pub menu_open: bool,
    pub images: &'a ImageCache,
    pub notifications: &'a notifications::Manager,
    pub window_size: Size,
    pub thumbnail_height: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let photos = ctx.catalog.filter(ctx.filter);

    let header = header::view(header::ViewContext {
        i18n: ctx.i18n,
        tag_index: ctx.catalog.tag_index(),
        active: ctx.filter,
        menu_open: ctx.menu_open,
        shown: photos.len(),
        total: ctx.catalog.len(),
    })
    .map(Message::Header);

    let grid = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        photos,
        images: ctx.images,
        columns: gallery::columns_for_width(ctx.window_size.width),
        thumbnail_height: ctx.thumbnail_height,
    })
    .map(Message::Gallery);

    let mut page = Column::new().width(Length::Fill).push(header);
    if ctx.notifications.has_notifications() {
        page = page.push(ctx.notifications.view(ctx.i18n).map(Message::Notification));
    }
    page = page.push(scrollable(grid).width(Length::Fill).height(Length::Fill));

    let base = Container::new(page).width(Length::Fill).height(Length::Fill);

    match open_photo(&ctx) {
        Some((photo, cursor)) => {
            let modal = lightbox::view(lightbox::ViewContext {
                i18n: ctx.i18n,
                photo,
                cursor,
                images: ctx.images,
                image_height: ctx.window_size.height * sizing::MODAL_IMAGE_HEIGHT_RATIO,
            })
            .map(Message::Lightbox);
            Stack::new().push(base).push(modal).into()
        }
        None => base.into(),
    }
}

fn open_photo<'a>(ctx: &ViewContext<'a>) -> Option<(&'a Photo, ImageCursor)> {
    let photo = ctx.catalog.get(ctx.viewer.photo_id()?)?;
    Some((photo, ctx.viewer.cursor()?))
}
