// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio regions.
//!
//! The `App` struct owns the [`ViewState`], the localization bundle, and the
//! values read once from `settings.toml`. Region messages are routed through
//! [`update`] into view state transitions, and [`view`] renders the page from
//! that state.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;
pub mod view_state;

pub use message::{Flags, Message};
pub use view_state::{Lightbox, ViewState};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    state: ViewState,
    /// Last known logical window width, drives breakpoints.
    window_width: f32,
    /// Base locator of the placeholder image service.
    image_base: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("window_width", &self.window_width)
            .field("image_base", &self.image_base)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings from the configured size.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();

    window::Settings {
        size: Size::new(width, height),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced requires a `Fn` boot closure; the state is consumed on first call.
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) =
            boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self {
            i18n: I18n::default(),
            state: ViewState::new(),
            window_width: config.window.size().0,
            image_base: config.gallery.image_base().to_string(),
        }
    }
}

impl App {
    /// Initializes application state from the launcher flags and the
    /// configuration loaded by [`run`].
    fn new(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let app = App {
            window_width: config.window.size().0,
            image_base: config.gallery.image_base().to_string(),
            state: ViewState::new(),
            i18n,
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            image_base = %app.image_base,
            "portfolio started"
        );

        (app, Task::none())
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn window_width(&self) -> f32 {
        self.window_width
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        ThemeMode::from_dark_flag(self.state.is_dark_mode()).iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            state: &mut self.state,
            window_width: &mut self.window_width,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            state: &self.state,
            window_width: self.window_width,
            image_base: &self.image_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::{Category, PhotoId};
    use crate::ui::{lightbox, mobile_menu, navbar, photo_grid};

    #[test]
    fn default_app_starts_in_initial_state() {
        let app = App::default();
        assert_eq!(app.state(), &ViewState::new());
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.title(), "IcedFolio");
    }

    #[test]
    fn mobile_menu_selection_closes_menu() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.state().is_menu_open());

        let _ = app.update(Message::MobileMenu(mobile_menu::Message::SelectCategory(
            Category::Portrait,
        )));

        assert_eq!(app.state().active_category(), Category::Portrait);
        assert!(!app.state().is_menu_open());
    }

    #[test]
    fn dark_mode_switches_iced_theme() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleDarkMode));
        assert_eq!(app.theme(), Theme::Dark);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleDarkMode));
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn grid_selection_opens_and_close_returns_to_closed() {
        let mut app = App::default();
        let _ = app.update(Message::Grid(photo_grid::Message::PhotoSelected(
            PhotoId::new(3),
        )));
        assert_eq!(
            app.state().selected_photo().map(|photo| photo.title),
            Some("City Lights")
        );

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert_eq!(app.state().lightbox(), Lightbox::Closed);
    }

    #[test]
    fn resize_updates_window_width_but_not_menu_flag() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(400.0, 700.0)));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));

        let _ = app.update(Message::WindowResized(Size::new(1280.0, 700.0)));

        assert!((app.window_width() - 1280.0).abs() < f32::EPSILON);
        assert!(app.state().is_menu_open());
    }

    #[test]
    fn view_renders_every_overlay_combination() {
        let mut app = App::default();
        let _ = app.view();

        let _ = app.update(Message::WindowResized(Size::new(360.0, 640.0)));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.view();

        let _ = app.update(Message::Grid(photo_grid::Message::PhotoSelected(
            PhotoId::new(1),
        )));
        let _ = app.view();
    }
}
