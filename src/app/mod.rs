// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and panels.
//!
//! The `App` struct wires together the domains (catalog, navigation,
//! localization, configuration) and translates messages into state
//! transitions. This file intentionally keeps policy decisions (window
//! sizing, slideshow cadence, screen switching) close to the main update
//! loop so it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog;
use crate::i18n::fluent::I18n;
use crate::navigation::SlideNavigator;
use crate::overlay::OverlayState;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state that bridges the screens, localization,
/// and user preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    home_navigator: SlideNavigator,
    gallery_navigator: SlideNavigator,
    current_project: &'static catalog::Project,
    overlays: OverlayState,
    theme: AppTheme,
    /// Whether the home slideshow advances on its own.
    slideshow_autoplay: bool,
    /// Delay between automatic slideshow advances.
    slideshow_interval: Duration,
    /// Root directory for catalog images.
    assets_dir: PathBuf,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("current_project", &self.current_project.slug)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            home_navigator: SlideNavigator::new(catalog::home_slides().len()),
            gallery_navigator: SlideNavigator::new(catalog::default_project().images.len()),
            current_project: catalog::default_project(),
            overlays: OverlayState::default(),
            theme: AppTheme::new(ThemeMode::System),
            slideshow_autoplay: config::DEFAULT_SLIDESHOW_AUTOPLAY,
            slideshow_interval: Duration::from_secs(config::DEFAULT_SLIDESHOW_INTERVAL_SECS),
            assets_dir: paths::get_assets_dir(None),
        }
    }
}

impl App {
    /// Initializes application state from the configuration file and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        // A broken settings file is not fatal; warn and run with defaults.
        if let Some(key) = config_warning {
            eprintln!("{}", i18n.tr(&key));
        }

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            slideshow_autoplay: config.slideshow.autoplay_enabled(),
            slideshow_interval: config.slideshow.interval(),
            assets_dir: paths::get_assets_dir(config.gallery.assets_dir.as_ref()),
            ..Self::default()
        };

        if let Some(slug) = flags.slug.as_deref() {
            update::open_project(&mut app.update_context(), slug);
        }

        (app, Task::none())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            screen: &mut self.screen,
            home_navigator: &mut self.home_navigator,
            gallery_navigator: &mut self.gallery_navigator,
            current_project: &mut self.current_project,
            overlays: &mut self.overlays,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");

        match self.screen {
            Screen::Home => app_name,
            Screen::Project => format!("{} - {}", self.current_project.name, app_name),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub = subscription::create_tick_subscription(
            self.screen,
            self.slideshow_autoplay,
            self.slideshow_interval,
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Project(project_message) => {
                update::handle_project_message(&mut ctx, project_message)
            }
            Message::Panels(panels_message) => {
                update::handle_panels_message(&mut ctx, panels_message)
            }
            Message::SlideshowTick(_instant) => update::handle_slideshow_tick(&mut ctx),
            Message::EscapePressed => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: &self.theme,
            screen: self.screen,
            home_navigator: &self.home_navigator,
            gallery_navigator: &self.gallery_navigator,
            current_project: self.current_project,
            overlays: &self.overlays,
            assets_dir: &self.assets_dir,
        })
    }
}
