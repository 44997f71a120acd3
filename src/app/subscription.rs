// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and window resizes are turned into app messages. Key
//! presses already captured by a widget are ignored.

use super::message::Shortcut;
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                event::Status::Ignored,
            ) => shortcut_for(&key).map(Message::Shortcut),
            _ => None,
        }
    })
}

/// Maps a pressed key to a gallery shortcut.
pub fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::Escape) => Some(Shortcut::Escape),
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        _ => None,
    }
}
