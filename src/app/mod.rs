// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between pages and chrome.
//!
//! The `App` struct wires together the components (theme controller, header
//! fade, navigation highlight, gallery filter, particle background) and
//! translates their events into route changes, clipboard writes and
//! persistence. Everything that can fail (config, embedded content, storage)
//! is resolved in [`Startup::load`] before the window opens, so `App::new`
//! itself never fails.

pub mod config;
mod message;
pub mod paths;
pub mod route;
pub mod storage;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::content::Content;
use crate::domain::fade::{ScrollFade, ViewportMetrics};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::navbar;
use crate::ui::project_detail;
use crate::ui::state::{ParticleField, ParticleSettings};
use crate::ui::theming::ThemeController;
use config::Config;
use fluent_bundle::FluentValue;
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;
use storage::{FileStore, KeyValueStore};

/// i18n key of the banner shown when the theme cannot be persisted.
pub const STORAGE_WARNING: &str = "warning-storage-unavailable";

/// Warning key shown when a corrupt storage file was discarded.
pub const STORAGE_RESET_WARNING: &str = "warning-storage-reset";

/// Seed of the particle layout, fixed so every launch looks the same.
const PARTICLE_SEED: u64 = 0x5EED_F011;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Everything resolved before the window opens.
pub struct Startup {
    pub flags: Flags,
    pub config: Config,
    pub content: Content,
    pub store: Option<Box<dyn KeyValueStore>>,
    /// i18n keys of warnings to show as banners.
    pub warnings: Vec<String>,
}

impl fmt::Debug for Startup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Startup")
            .field("flags", &self.flags)
            .field("has_store", &self.store.is_some())
            .field("warnings", &self.warnings)
            .finish()
    }
}

impl Startup {
    /// Loads configuration, embedded content and the theme store.
    ///
    /// Only broken embedded content is an error. A missing or corrupt config
    /// falls back to defaults. A corrupt store starts empty and is rewritten
    /// on the next toggle, while an unreadable one leaves the theme in-memory.
    /// Each case is reported as a warning.
    pub fn load(flags: Flags) -> Result<Self> {
        let mut warnings = Vec::new();

        let (config, config_warning) = config::load();
        warnings.extend(config_warning);

        let content = Content::load(config.content.writeup_cache_capacity())?;

        let store: Option<Box<dyn KeyValueStore>> = match FileStore::open() {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "theme store opened");
                if store.was_reset() {
                    warnings.push(STORAGE_RESET_WARNING.to_string());
                }
                Some(Box::new(store))
            }
            Err(err) => {
                tracing::warn!(error = %err, "theme store unavailable, preference will not persist");
                warnings.push(STORAGE_WARNING.to_string());
                None
            }
        };

        Ok(Self {
            flags,
            config,
            content,
            store,
            warnings,
        })
    }
}

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    content: Content,
    route: Route,
    theme: ThemeController,
    nav: navbar::State,
    fade: ScrollFade,
    gallery: gallery::State,
    /// Present while a project detail route is shown.
    detail: Option<project_detail::State>,
    /// `None` when the background is disabled.
    particles: Option<ParticleField>,
    cursor: Option<Point>,
    window_size: Size,
    /// Last frame tick, cleared when no animation is running.
    last_frame: Option<Instant>,
    warnings: Vec<String>,
    /// Last external link copied to the clipboard.
    copied_link: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("theme", &self.theme.preference())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    use std::cell::RefCell;

    // Wrap startup in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(startup));
    let boot = move || {
        let startup = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(startup)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            flags,
            config,
            content,
            store,
            warnings,
        } = startup;

        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme = ThemeController::init(store, &config.general);

        let particles = config.background.is_enabled().then(|| {
            let mut field =
                ParticleField::new(ParticleSettings::from(&config.background), PARTICLE_SEED);
            field.resize(Size::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32,
            ));
            field
        });

        let mut app = App {
            i18n,
            nav: navbar::State::new("/"),
            fade: ScrollFade::new(config.header.fade_config()),
            gallery: gallery::State::new(config.gallery.default_sort),
            detail: None,
            particles,
            cursor: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            last_frame: None,
            warnings,
            copied_link: None,
            route: Route::About,
            theme,
            content,
            config,
        };

        app.fade.mount(
            ViewportMetrics {
                scroll_offset: 0.0,
                width: app.window_size.width,
            },
            Instant::now(),
        );

        let task = match flags.route {
            Some(path) => app.navigate(&path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let name = self.content.profile().name.as_str();
        let base = self
            .i18n
            .tr_with_args("window-title", &[("name", FluentValue::from(name))]);

        match &self.route {
            Route::Project(slug) => match self.content.project(slug) {
                Some(project) => format!("{} - {base}", project.title),
                None => base,
            },
            _ => base,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(self.is_animating());

        Subscription::batch([event_sub, frame_sub])
    }

    /// Whether anything needs frame ticks right now.
    fn is_animating(&self) -> bool {
        self.nav.is_animating() || self.particles.is_some() || self.fade.needs_tick()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            content: &self.content,
            route: &self.route,
            theme: &self.theme,
            nav: &self.nav,
            fade: &self.fade,
            gallery: &self.gallery,
            detail: self.detail.as_ref(),
            particles: self.particles.as_ref(),
            cursor: self.cursor,
            warnings: &self.warnings,
            copied_link: self.copied_link.as_deref(),
        })
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
