// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the lightbox.
//!
//! The `App` struct owns the catalog, the tag filter and the viewer state, and
//! translates messages into state transitions plus the image fetches each new
//! state needs.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};
pub use subscription::shortcut_for;

use crate::catalog::{self, CatalogSource};
use crate::domain::{Catalog, TagFilter, ViewerState};
use crate::i18n::fluent::I18n;
use crate::media::{Fetcher, ImageCache};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    filter: TagFilter,
    viewer: ViewerState,
    /// Whether the tag dropdown is open.
    menu_open: bool,
    images: ImageCache,
    /// `None` when the HTTP client could not be built; fetches then fail.
    fetcher: Option<Fetcher>,
    theme_mode: ThemeMode,
    thumbnail_height: f32,
    window_size: Size,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.catalog.len())
            .field("filter", &self.filter)
            .field("viewer", &self.viewer)
            .field("menu_open", &self.menu_open)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, translations and the catalog, then starts fetching the
    /// visible covers.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.gallery.catalog_path.clone());
        let (catalog, catalog_warning) = catalog::load(&CatalogSource::from_option(catalog_path));

        let disk_cache = if config.cache.disk_cache_enabled() {
            paths::get_image_cache_dir()
        } else {
            None
        };
        let fetcher = match Fetcher::new(disk_cache) {
            Ok(fetcher) => Some(fetcher),
            Err(err) => {
                tracing::error!(error = %err, "cannot build HTTP client");
                None
            }
        };

        let mut app = Self::from_parts(&config, catalog, i18n, fetcher);
        app.report_load_problems(config_warning, catalog_warning);

        let task = update::refresh_images(&mut app.update_context());
        (app, task)
    }

    /// Shows a banner for each startup problem. A rejected catalog is an
    /// error; a rejected settings file only falls back to defaults.
    fn report_load_problems(
        &mut self,
        config_warning: Option<String>,
        catalog_warning: Option<String>,
    ) {
        if let Some(key) = config_warning {
            self.notifications.push(notifications::Notification::warning(key));
        }
        if let Some(key) = catalog_warning {
            self.notifications.push(notifications::Notification::error(key));
        }
    }

    /// Assembles the app from already-loaded parts.
    fn from_parts(
        config: &Config,
        catalog: Catalog,
        i18n: I18n,
        fetcher: Option<Fetcher>,
    ) -> Self {
        Self {
            i18n,
            catalog,
            filter: TagFilter::default(),
            viewer: ViewerState::default(),
            menu_open: false,
            images: ImageCache::new(config.cache.memory_images()),
            fetcher,
            theme_mode: config.general.theme_mode,
            thumbnail_height: config.gallery.thumbnail_height(),
            window_size: default_window_size(),
            notifications: notifications::Manager::new(),
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            catalog: &self.catalog,
            filter: &mut self.filter,
            viewer: &mut self.viewer,
            menu_open: &mut self.menu_open,
            images: &mut self.images,
            fetcher: self.fetcher.as_ref(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.photo_id().and_then(|id| self.catalog.get(id)) {
            Some(photo) => format!("{} - {app_name}", photo.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut self.update_context(), header_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::Lightbox(lightbox_message) => {
                update::handle_lightbox_message(&mut self.update_context(), lightbox_message)
            }
            Message::Shortcut(shortcut) => {
                update::handle_shortcut(&mut self.update_context(), shortcut)
            }
            Message::ImageLoaded { uri, result } => {
                update::handle_image_loaded(&mut self.update_context(), &uri, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            filter: &self.filter,
            viewer: self.viewer,
            menu_open: self.menu_open,
            images: &self.images,
            notifications: &self.notifications,
            window_size: self.window_size,
            thumbnail_height: self.thumbnail_height,
        })
    }
}
