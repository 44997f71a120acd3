// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the app
//! state it may touch, applies the transition and returns the image fetches
//! the new state needs. After every transition the on-screen images (visible
//! covers plus the lightbox image and its neighbours) are pinned in the cache
//! and requested if missing.

use super::message::Shortcut;
use super::Message;
use crate::domain::{Catalog, TagFilter, ViewerState};
use crate::error::FetchError;
use crate::media::{Fetcher, ImageCache};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::{gallery, lightbox};
use iced::widget::image::Handle;
use iced::Task;

/// Mutable view of the app state used by the handlers.
pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub filter: &'a mut TagFilter,
    pub viewer: &'a mut ViewerState,
    pub menu_open: &'a mut bool,
    pub images: &'a mut ImageCache,
    pub fetcher: Option<&'a Fetcher>,
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.menu_open) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::FilterChanged(filter) => {
            tracing::info!(tag = filter.label(), "tag filter changed");
            *ctx.filter = filter;
            refresh_images(ctx)
        }
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::Open(id) => {
            let Some(photo) = ctx.catalog.get(id) else {
                tracing::warn!(%id, "open requested for unknown photo");
                return Task::none();
            };
            *ctx.menu_open = false;
            *ctx.viewer = ctx.viewer.select(photo);
            // Reopening a photo retries its failed images
            for uri in &photo.images {
                ctx.images.forget_failure(uri);
            }
            tracing::info!(%id, title = %photo.title, "viewer opened");
            refresh_images(ctx)
        }
    }
}

pub fn handle_lightbox_message(
    ctx: &mut UpdateContext<'_>,
    message: lightbox::Message,
) -> Task<Message> {
    *ctx.viewer = match message {
        lightbox::Message::Close => {
            tracing::info!("viewer closed");
            tracing::debug!(
                stats = ?ctx.images.stats(),
                cached = ctx.images.len(),
                "image cache"
            );
            ctx.viewer.close()
        }
        lightbox::Message::Previous => ctx.viewer.prev(),
        lightbox::Message::Next => ctx.viewer.next(),
        lightbox::Message::Jump(index) => ctx.viewer.jump(index),
    };
    refresh_images(ctx)
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::Escape if *ctx.menu_open => {
            handle_header_message(ctx, header::Message::CloseMenu)
        }
        Shortcut::Escape if ctx.viewer.is_open() => {
            handle_lightbox_message(ctx, lightbox::Message::Close)
        }
        Shortcut::Previous if ctx.viewer.is_open() => {
            handle_lightbox_message(ctx, lightbox::Message::Previous)
        }
        Shortcut::Next if ctx.viewer.is_open() => {
            handle_lightbox_message(ctx, lightbox::Message::Next)
        }
        _ => Task::none(),
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    uri: &str,
    result: Result<Handle, FetchError>,
) -> Task<Message> {
    if result.is_ok() {
        tracing::debug!(uri, "image ready");
    }
    ctx.images.complete(uri, result);
    Task::none()
}

/// Pins every image currently on screen and requests the missing ones.
pub fn refresh_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let mut uris = visible_covers(ctx);
    uris.extend(viewer_images(ctx));
    ctx.images.pin(uris.iter().cloned());
    Task::batch(uris.iter().map(|uri| request_image(ctx, uri)))
}

/// Cover of every photo shown under the current filter.
fn visible_covers(ctx: &UpdateContext<'_>) -> Vec<String> {
    ctx.catalog
        .filter(&*ctx.filter)
        .into_iter()
        .filter_map(|photo| photo.cover().map(str::to_string))
        .collect()
}

/// Active lightbox image followed by its cyclic neighbours.
fn viewer_images(ctx: &UpdateContext<'_>) -> Vec<String> {
    let (Some(id), Some(cursor)) = (ctx.viewer.photo_id(), ctx.viewer.cursor()) else {
        return Vec::new();
    };
    let Some(photo) = ctx.catalog.get(id) else {
        return Vec::new();
    };

    std::iter::once(cursor.index())
        .chain(cursor.neighbours())
        .filter_map(|index| photo.image(index).map(str::to_string))
        .collect()
}

fn request_image(ctx: &mut UpdateContext<'_>, uri: &str) -> Task<Message> {
    if !ctx.images.begin_request(uri) {
        return Task::none();
    }

    match ctx.fetcher {
        Some(fetcher) => {
            let uri = uri.to_string();
            Task::perform(fetcher.clone().fetch_handle(uri.clone()), move |result| {
                Message::ImageLoaded {
                    uri: uri.clone(),
                    result,
                }
            })
        }
        None => {
            ctx.images.complete(
                uri,
                Err(FetchError::Http("HTTP client unavailable".to_string())),
            );
            Task::none()
        }
    }
}
