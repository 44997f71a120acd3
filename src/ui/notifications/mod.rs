// SPDX-License-Identifier: MPL-2.0
//! Dismissible banners for load warnings.
//!
//! - [`notification`] - `Notification` with its severity and i18n key
//! - [`manager`] - `Manager` holding the visible banners
//!
//! ```ignore
//! manager.push(Notification::warning("error-catalog-parse"));
//! let banners = manager.view(&i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
