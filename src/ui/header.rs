// SPDX-License-Identifier: MPL-2.0
//! Header bar with the app title and the tag filter dropdown.
//!
//! The dropdown lists every entry of the tag index. Picking one closes the
//! menu and reports the new filter to the parent.

use crate::domain::{TagFilter, TagIndex, ALL_TAG};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, tooltip, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tag_index: &'a TagIndex,
    pub active: &'a TagFilter,
    pub menu_open: bool,
    pub shown: usize,
    pub total: usize,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    SelectTag(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    FilterChanged(TagFilter),
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::SelectTag(label) => {
            *menu_open = false;
            Event::FilterChanged(TagFilter::from_label(&label))
        }
    }
}

/// Display label for a tag index entry; "all" is localized.
#[must_use]
pub fn tag_label(i18n: &I18n, tag: &str) -> String {
    if tag == ALL_TAG {
        i18n.tr("filter-all")
    } else {
        tag.to_string()
    }
}

/// Render the header, with the dropdown below it when open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));
    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }
    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_LG);

    let count = Text::new(ctx.i18n.tr_with_args(
        "filter-count",
        &[
            ("shown", &ctx.shown.to_string()),
            ("total", &ctx.total.to_string()),
        ],
    ))
    .size(typography::CAPTION);

    let arrow = if ctx.menu_open { "▴" } else { "▾" };
    let filter_button = button(Text::new(format!(
        "{} {arrow}",
        tag_label(ctx.i18n, ctx.active.label())
    )))
    .on_press(Message::ToggleMenu)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::primary);

    let filter_button = tooltip(
        filter_button,
        Text::new(ctx.i18n.tr("filter-button-tooltip")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::MD, spacing::LG])
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(count)
        .push(filter_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = ctx.tag_index.iter().map(|tag| {
        let active = ctx.active.label() == tag;
        button(Text::new(tag_label(ctx.i18n, tag)).size(typography::BODY))
            .on_press(Message::SelectTag(tag.to_string()))
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::menu_item(active))
            .into()
    });

    let menu = Container::new(Column::with_children(items).spacing(spacing::XXS))
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::FILTER_MENU_WIDTH))
        .style(styles::container::panel);

    Row::new()
        .padding([0.0, spacing::LG])
        .push(Space::new().width(Length::Fill))
        .push(menu)
        .into()
}
