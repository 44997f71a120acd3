// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps the visible banners and renders them as a stack under
//! the header. Banners stay until the user dismisses them.

use super::notification::{Notification, NotificationId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` unless one with the same message is already up.
    ///
    /// The oldest banner is dropped once `MAX_VISIBLE` is exceeded.
    pub fn push(&mut self, notification: Notification) {
        if self
            .visible
            .iter()
            .any(|n| n.message_key() == notification.message_key())
        {
            return;
        }
        tracing::debug!(key = notification.message_key(), "showing notification");
        self.visible.push_front(notification);
        self.visible.truncate(MAX_VISIBLE);
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.visible.iter().position(|n| n.id() == id) {
            Some(pos) => {
                self.visible.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let banners = self.visible.iter().map(|notification| {
            let accent = notification.severity().color();
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(i18n.tr(notification.message_key())).size(typography::BODY))
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
                        .on_press(Message::Dismiss(notification.id()))
                        .style(styles::button::text),
                );

            Container::new(row)
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::container::banner(accent))
                .into()
        });

        Column::with_children(banners)
            .spacing(spacing::XS)
            .padding([spacing::XS, spacing::LG])
            .into()
    }
}
